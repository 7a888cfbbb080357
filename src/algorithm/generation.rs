//! Capped regenerate-and-evaluate loop
//!
//! A generator builds candidate maps; an evaluator scores them, returning NaN
//! for maps it cannot score (for example an unreachable finish). Candidates are
//! regenerated until one scores or the attempt cap is reached.

use rand::Rng;
use tracing::{debug, trace};

use crate::io::error::{MapError, Result, invalid_argument};
use crate::spatial::grid::MapGrid;
use crate::spatial::tiles::Tile;

/// Scores a finished board given as rows of tiles, row 0 first
///
/// Returning NaN marks the board as invalid.
pub trait Evaluator {
    /// Score one board
    fn evaluate(&mut self, board: &[Vec<Tile>]) -> f64;
}

impl<F> Evaluator for F
where
    F: FnMut(&[Vec<Tile>]) -> f64,
{
    fn evaluate(&mut self, board: &[Vec<Tile>]) -> f64 {
        self(board)
    }
}

/// Builds one candidate map per call
pub trait MapGenerator {
    /// Name used for the generated maps and in errors
    fn name(&self) -> &str;

    /// Build a fresh candidate
    ///
    /// # Errors
    ///
    /// Propagates placement and grid errors from the construction
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<MapGrid>;
}

/// A map the evaluator accepted
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMap {
    /// The accepted map
    pub grid: MapGrid,
    /// Evaluator score
    pub value: f64,
    /// Candidates generated, including the accepted one
    pub attempts: usize,
}

/// Generate candidates until the evaluator returns a number
///
/// # Errors
///
/// - `InvalidArgument` if `max_attempts` is zero
/// - `GenerationExhausted` if every attempt scored NaN
/// - Any error from the generator, returned at once without retrying
pub fn generate_scored<G, E, R>(
    generator: &G,
    evaluator: &mut E,
    max_attempts: usize,
    rng: &mut R,
) -> Result<ScoredMap>
where
    G: MapGenerator + ?Sized,
    E: Evaluator + ?Sized,
    R: Rng + ?Sized,
{
    if max_attempts == 0 {
        return Err(invalid_argument(
            "max_attempts",
            &max_attempts,
            &"must allow at least one attempt",
        ));
    }

    for attempt in 1..=max_attempts {
        let grid = generator.generate(rng)?;
        let value = evaluator.evaluate(&grid.board());

        if !value.is_nan() {
            debug!(generator = generator.name(), attempt, value, "map accepted");
            return Ok(ScoredMap {
                grid,
                value,
                attempts: attempt,
            });
        }
        trace!(generator = generator.name(), attempt, "map rejected by evaluator");
    }

    debug!(generator = generator.name(), max_attempts, "generation attempts exhausted");
    Err(MapError::GenerationExhausted {
        generator: generator.name().to_string(),
        attempts: max_attempts,
    })
}
