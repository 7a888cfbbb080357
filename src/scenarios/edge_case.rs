//! "Edge Case": rocks and objectives squeezed into a ring around open ground

use rand::Rng;

use crate::algorithm::generation::MapGenerator;
use crate::algorithm::placement::PlacementOptions;
use crate::io::error::Result;
use crate::spatial::grid::MapGrid;
use crate::spatial::tiles::{FINISH, GREEN_START, OPEN, ROCK};

const WIDTH: usize = 20;
const HEIGHT: usize = 20;
/// Width of the ring left around the open center
const BORDER: usize = 6;
const WALLS: usize = 22;
const CHECKPOINTS: usize = 2;
const TELEPORTERS: usize = 3;

/// 20×20 map whose center is open ground, forcing everything onto the edges
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeCase;

impl EdgeCase {
    /// Display name of generated maps
    pub const NAME: &'static str = "Edge Case";
}

impl MapGenerator for EdgeCase {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<MapGrid> {
        let mut grid = MapGrid::new(WIDTH, HEIGHT, WALLS, Self::NAME)?;
        grid.set(OPEN, BORDER..WIDTH - BORDER, BORDER..HEIGHT - BORDER)?;

        let anywhere = PlacementOptions::default();
        let rocks = rng.random_range(13..=37);
        grid.place_randomly(ROCK, rocks, &anywhere, rng)?;
        grid.place_checkpoints(CHECKPOINTS, &anywhere, rng)?;
        grid.place_teleporters(TELEPORTERS, &anywhere, |_| 1, rng)?;
        grid.place_randomly(GREEN_START, 1, &anywhere, rng)?;
        grid.place_randomly(FINISH, 1, &anywhere, rng)?;

        Ok(grid)
    }
}
