//! "You Only Live Twice": every objective appears twice, once in a locked
//! reference column on the right and once scattered over the playfield

use rand::Rng;

use crate::algorithm::generation::MapGenerator;
use crate::algorithm::placement::PlacementOptions;
use crate::io::error::Result;
use crate::spatial::grid::MapGrid;
use crate::spatial::tiles::{
    CHECKPOINTS, FINISH, GREEN_START, OPEN, ROCK, TELE_INS, TELE_OUTS, Tile,
};

const WIDTH: usize = 25;
const HEIGHT: usize = 11;
const WALLS: usize = 21;

/// 25×11 map with a reference column of objectives beside the finish line
#[derive(Debug, Clone, Copy, Default)]
pub struct YouOnlyLiveTwice;

impl YouOnlyLiveTwice {
    /// Display name of generated maps
    pub const NAME: &'static str = "You Only Live Twice";
}

impl MapGenerator for YouOnlyLiveTwice {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<MapGrid> {
        let mut grid = MapGrid::new(WIDTH, HEIGHT, WALLS, Self::NAME)?;
        let last = WIDTH - 1;

        grid.set(OPEN, [last - 1], 0..HEIGHT)?;

        // Reference column, top to bottom
        let reference: Vec<Tile> = TELE_OUTS
            .iter()
            .take(4)
            .chain(TELE_INS.get(4))
            .chain(CHECKPOINTS.iter())
            .chain([&FINISH])
            .copied()
            .collect();
        for (row, &tile) in reference.iter().enumerate() {
            grid.set_single(tile, last, row)?;
        }

        grid.set(GREEN_START, [0], 0..HEIGHT)?;
        grid.set(FINISH, [last - 2], 0..HEIGHT)?;

        let playfield = PlacementOptions::default().in_area(1..last - 2, 0..HEIGHT);
        let scattered = TELE_INS
            .iter()
            .take(4)
            .chain(TELE_OUTS.get(4))
            .chain(CHECKPOINTS.iter());
        for &tile in scattered {
            grid.place_randomly(tile, 1, &playfield, rng)?;
        }

        let rocks = 2 + rng.random_range(17..=23);
        grid.place_randomly(ROCK, rocks, &PlacementOptions::default(), rng)?;

        Ok(grid)
    }
}
