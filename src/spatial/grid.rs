//! Dense rectangular tile grid with coordinate indexing and bulk mutation
//!
//! Cell `(i, j)` is column `i`, row `j`. Tiles are stored in a row-major
//! `(rows, columns)` array so logical iteration order matches the linear index
//! `j * width + i` that map codes are written in.

use std::fmt;

use ndarray::Array2;

use crate::io::configuration::{MAX_GRID_CELLS, MAX_GRID_DIMENSION};
use crate::io::error::{MapError, Result, invalid_argument};
use crate::spatial::tiles::{EMPTY, Tile};

/// Characters that would corrupt the map code header if used in a name
const RESERVED_NAME_CHARS: [char; 4] = ['.', ':', '\r', '\n'];

/// A map: dimensions, wall budget, display name and one tile per cell
///
/// Every mutating method either succeeds completely or returns an error and
/// leaves the grid untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapGrid {
    walls: usize,
    name: String,
    tiles: Array2<Tile>,
}

impl MapGrid {
    /// Create an all-empty grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a dimension is zero or above
    /// `MAX_GRID_DIMENSION`, the grid would hold more than `MAX_GRID_CELLS`
    /// cells, or the name contains a reserved character
    pub fn new(width: usize, height: usize, walls: usize, name: impl Into<String>) -> Result<Self> {
        check_dimensions(width, height)?;
        let name = name.into();
        check_name(&name)?;

        Ok(Self {
            walls,
            name,
            tiles: Array2::from_elem((height, width), EMPTY),
        })
    }

    /// Create a grid from a row-major tile buffer
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the dimensions or name are invalid or the
    /// buffer length is not `width * height`
    pub fn from_tiles(
        width: usize,
        height: usize,
        walls: usize,
        name: impl Into<String>,
        tiles: Vec<Tile>,
    ) -> Result<Self> {
        check_dimensions(width, height)?;
        let name = name.into();
        check_name(&name)?;

        let buffer_len = tiles.len();
        let tiles = Array2::from_shape_vec((height, width), tiles).map_err(|error| {
            invalid_argument(
                "tiles",
                &buffer_len,
                &format!("expected {} tiles for {width}x{height}: {error}", width * height),
            )
        })?;

        Ok(Self { walls, name, tiles })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// Walls the player may place
    pub const fn walls(&self) -> usize {
        self.walls
    }

    /// Change the wall budget
    pub const fn set_walls(&mut self, walls: usize) {
        self.walls = walls;
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the map
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the name contains `.`, `:` or a line break
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        check_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Linear index of column `i`, row `j`
    pub fn sub2ind(&self, i: usize, j: usize) -> usize {
        j * self.width() + i
    }

    /// Column and row of a linear index
    pub fn ind2sub(&self, index: usize) -> (usize, usize) {
        (index % self.width(), index / self.width())
    }

    /// Whether `(i, j)` lies inside the grid
    pub fn contains(&self, i: usize, j: usize) -> bool {
        i < self.width() && j < self.height()
    }

    /// Tile at column `i`, row `j`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the coordinate is out of bounds
    pub fn get(&self, i: usize, j: usize) -> Result<Tile> {
        self.tiles
            .get((j, i))
            .copied()
            .ok_or_else(|| self.out_of_bounds(i, j))
    }

    /// Set a single cell
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the coordinate is out of bounds
    pub fn set_single(&mut self, tile: Tile, i: usize, j: usize) -> Result<()> {
        if !self.contains(i, j) {
            return Err(self.out_of_bounds(i, j));
        }
        if let Some(cell) = self.tiles.get_mut((j, i)) {
            *cell = tile;
        }
        Ok(())
    }

    /// Paint every cell in the cross product `columns × rows`
    ///
    /// Pass `[i]` for a single column or row. All coordinates are checked
    /// before anything is written.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any coordinate is out of bounds
    pub fn set(
        &mut self,
        tile: Tile,
        columns: impl IntoIterator<Item = usize>,
        rows: impl IntoIterator<Item = usize>,
    ) -> Result<()> {
        let columns: Vec<usize> = columns.into_iter().collect();
        let rows: Vec<usize> = rows.into_iter().collect();

        if let Some(&i) = columns.iter().find(|&&i| i >= self.width()) {
            return Err(self.out_of_bounds(i, rows.first().copied().unwrap_or_default()));
        }
        if let Some(&j) = rows.iter().find(|&&j| j >= self.height()) {
            return Err(self.out_of_bounds(columns.first().copied().unwrap_or_default(), j));
        }

        for &i in &columns {
            for &j in &rows {
                if let Some(cell) = self.tiles.get_mut((j, i)) {
                    *cell = tile;
                }
            }
        }
        Ok(())
    }

    /// Rewrite every `from` cell to `to`, returning how many changed
    pub fn replace_all(&mut self, from: Tile, to: Tile) -> usize {
        let mut replaced = 0;
        for cell in &mut self.tiles {
            if *cell == from {
                *cell = to;
                replaced += 1;
            }
        }
        replaced
    }

    /// Tiles in linear (row-major) order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    /// Number of cells holding `tile`
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&cell| cell == tile).count()
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.count(EMPTY)
    }

    /// Rows of tiles, row 0 first
    pub fn board(&self) -> Vec<Vec<Tile>> {
        self.tiles.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Rows of legacy two-character display codes, row 0 first
    pub fn legacy_board(&self) -> Vec<Vec<&'static str>> {
        self.tiles
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|tile| tile.legacy_code()).collect())
            .collect()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }

    fn out_of_bounds(&self, i: usize, j: usize) -> MapError {
        invalid_argument(
            "coordinate",
            &format!("({i}, {j})"),
            &format!("outside {}x{} grid", self.width(), self.height()),
        )
    }
}

impl fmt::Display for MapGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {} walls", self.name, self.walls)?;
        for row in self.tiles.rows() {
            let line: String = row.iter().map(|tile| tile.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Validate grid dimensions against the allowed range and cell budget
pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<()> {
    for (parameter, value) in [("width", width), ("height", height)] {
        if value == 0 || value > MAX_GRID_DIMENSION {
            return Err(invalid_argument(
                parameter,
                &value,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }
    }
    // Both axes are capped, so the product cannot overflow
    if width * height > MAX_GRID_CELLS {
        return Err(invalid_argument(
            "dimensions",
            &format!("{width}x{height}"),
            &format!("more than {MAX_GRID_CELLS} cells"),
        ));
    }
    Ok(())
}

fn check_name(name: &str) -> Result<()> {
    if name.contains(RESERVED_NAME_CHARS) {
        return Err(invalid_argument(
            "name",
            &name,
            &"must not contain '.', ':' or line breaks",
        ));
    }
    Ok(())
}
