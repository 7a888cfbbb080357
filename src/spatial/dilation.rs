//! Integer upscaling of a map
//!
//! Each source cell becomes a `k × k` block in a fresh grid. The wall budget
//! scales with `k` and the name gains an ` x{k}` suffix.

use crate::io::error::{Result, invalid_argument};
use crate::spatial::grid::{MapGrid, check_dimensions};

impl MapGrid {
    /// Produce a new grid scaled by `factor` in both directions
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `factor` is zero or the scaled grid would
    /// exceed the allowed dimensions
    pub fn dilate(&self, factor: usize) -> Result<Self> {
        if factor == 0 {
            return Err(invalid_argument(
                "factor",
                &factor,
                &"must be a positive integer",
            ));
        }

        let scaled = |value: usize| {
            value
                .checked_mul(factor)
                .ok_or_else(|| invalid_argument("factor", &factor, &"scaled size overflows"))
        };
        let width = scaled(self.width())?;
        let height = scaled(self.height())?;
        let walls = scaled(self.walls())?;
        check_dimensions(width, height)?;

        let mut dilated = Self::new(width, height, walls, format!("{} x{factor}", self.name()))?;

        for (index, tile) in self.tiles().enumerate() {
            if tile.is_empty() {
                continue;
            }
            let (i, j) = self.ind2sub(index);
            dilated.set(
                tile,
                factor * i..factor * i + factor,
                factor * j..factor * j + factor,
            )?;
        }

        Ok(dilated)
    }
}
