//! Ready-made map scenarios built from the placement primitives

use rand::Rng;

use crate::algorithm::generation::MapGenerator;
use crate::io::error::Result;
use crate::spatial::grid::MapGrid;

/// Open-center ring map
pub mod edge_case;
/// Doubled-objective map with a reference column
pub mod twice;

pub use edge_case::EdgeCase;
pub use twice::YouOnlyLiveTwice;

/// Every built-in scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// See [`EdgeCase`]
    EdgeCase,
    /// See [`YouOnlyLiveTwice`]
    YouOnlyLiveTwice,
}

impl Scenario {
    /// All scenarios in posting order
    pub const ALL: [Self; 2] = [Self::EdgeCase, Self::YouOnlyLiveTwice];
}

impl MapGenerator for Scenario {
    fn name(&self) -> &str {
        match self {
            Self::EdgeCase => EdgeCase::NAME,
            Self::YouOnlyLiveTwice => YouOnlyLiveTwice::NAME,
        }
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<MapGrid> {
        match self {
            Self::EdgeCase => EdgeCase.generate(rng),
            Self::YouOnlyLiveTwice => YouOnlyLiveTwice.generate(rng),
        }
    }
}
