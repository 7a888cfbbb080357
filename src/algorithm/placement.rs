//! Constrained random tile placement
//!
//! Placement is rejection sampling over a candidate area: draw a column and a
//! row uniformly, keep the cell if it is empty and passes the optional
//! condition, otherwise count a miss. A run of consecutive misses aborts the
//! call. Any successful placement resets the run, so the total number of draws
//! is unbounded while progress continues.
//!
//! Failed calls never leave partial writes behind: single placements revert
//! what they placed, compound placements restore a snapshot.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, trace};

use crate::io::configuration::{CHECKPOINT_GROUPS, DEFAULT_MAX_CONSECUTIVE_FAILURES};
use crate::io::error::{MapError, Result, invalid_argument};
use crate::spatial::grid::MapGrid;
use crate::spatial::tiles::{EMPTY, ROCK, Tile};

/// A placed cell as `(column, row)`
pub type Position = (usize, usize);

/// Extra eligibility test for a free cell, called as `condition(grid, i, j)`
pub type Condition<'a> = &'a dyn Fn(&MapGrid, usize, usize) -> bool;

/// Where and how random placement may put tiles
#[derive(Clone)]
pub struct PlacementOptions<'a> {
    /// Candidate columns (all columns when `None`)
    pub columns: Option<Vec<usize>>,
    /// Candidate rows (all rows when `None`)
    pub rows: Option<Vec<usize>>,
    /// Optional predicate a free cell must also satisfy
    pub condition: Option<Condition<'a>>,
    /// Consecutive misses tolerated before the call fails
    pub max_consecutive_failures: usize,
}

impl Default for PlacementOptions<'_> {
    fn default() -> Self {
        Self {
            columns: None,
            rows: None,
            condition: None,
            max_consecutive_failures: DEFAULT_MAX_CONSECUTIVE_FAILURES,
        }
    }
}

impl<'a> PlacementOptions<'a> {
    /// Restrict candidates to `columns × rows`
    #[must_use]
    pub fn in_area(
        mut self,
        columns: impl IntoIterator<Item = usize>,
        rows: impl IntoIterator<Item = usize>,
    ) -> Self {
        self.columns = Some(columns.into_iter().collect());
        self.rows = Some(rows.into_iter().collect());
        self
    }

    /// Require `condition` to hold for a cell to be eligible
    #[must_use]
    pub fn with_condition(mut self, condition: Condition<'a>) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Change the consecutive-miss budget
    #[must_use]
    pub const fn with_max_consecutive_failures(mut self, failures: usize) -> Self {
        self.max_consecutive_failures = failures;
        self
    }
}

/// Cells taken by one teleporter group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeleporterPlacement {
    /// Group index
    pub group: usize,
    /// The single input cell
    pub input: Position,
    /// Every output cell, in placement order
    pub outputs: Vec<Position>,
}

impl MapGrid {
    /// Place `tile` on `count` random eligible cells
    ///
    /// Returns the cells in placement order.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `tile` is empty, a candidate set is empty or out
    ///   of bounds, or the miss budget is zero
    /// - `PlacementExhausted` if the area holds fewer than `count` empty cells
    ///   or the miss budget runs out; the grid is left unchanged
    pub fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        tile: Tile,
        count: usize,
        options: &PlacementOptions<'_>,
        rng: &mut R,
    ) -> Result<Vec<Position>> {
        if tile.is_empty() {
            return Err(invalid_argument(
                "tile",
                &format!("{tile:?}"),
                &"cannot place an empty tile",
            ));
        }
        if options.max_consecutive_failures == 0 {
            return Err(invalid_argument(
                "max_consecutive_failures",
                &0,
                &"must allow at least one attempt",
            ));
        }

        let columns = candidates(options.columns.as_deref(), self.width(), "columns")?;
        let rows = candidates(options.rows.as_deref(), self.height(), "rows")?;

        if count == 0 {
            return Ok(Vec::new());
        }

        let free = self.free_cells_in(&columns, &rows);
        if free < count {
            debug!(%tile, requested = count, free, "not enough empty cells for placement");
            return Err(MapError::PlacementExhausted {
                tile,
                requested: count,
                placed: 0,
                failures: 0,
            });
        }

        let mut placed = Vec::with_capacity(count);
        let mut failures = 0;

        while placed.len() < count {
            if failures >= options.max_consecutive_failures {
                debug!(
                    %tile,
                    requested = count,
                    placed = placed.len(),
                    failures,
                    "random placement exhausted"
                );
                let placed_before_revert = placed.len();
                for &(i, j) in &placed {
                    self.set_single(EMPTY, i, j)?;
                }
                return Err(MapError::PlacementExhausted {
                    tile,
                    requested: count,
                    placed: placed_before_revert,
                    failures,
                });
            }

            let draw = match (columns.choose(rng), rows.choose(rng)) {
                (Some(&i), Some(&j)) => Some((i, j)),
                _ => None,
            };

            match draw {
                Some((i, j)) if self.is_eligible(i, j, options.condition) => {
                    self.set_single(tile, i, j)?;
                    placed.push((i, j));
                    failures = 0;
                }
                _ => failures += 1,
            }
        }

        trace!(%tile, count, "random placement complete");
        Ok(placed)
    }

    /// Place `tile` `count` times inside `columns × rows`
    ///
    /// # Errors
    ///
    /// As [`MapGrid::place_randomly`]
    pub fn place_randomly_in_area<R: Rng + ?Sized>(
        &mut self,
        tile: Tile,
        columns: impl IntoIterator<Item = usize>,
        rows: impl IntoIterator<Item = usize>,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Position>> {
        let options = PlacementOptions::default().in_area(columns, rows);
        self.place_randomly(tile, count, &options, rng)
    }

    /// Place `tile` `count` times anywhere `condition` accepts
    ///
    /// # Errors
    ///
    /// As [`MapGrid::place_randomly`]
    pub fn place_randomly_with<R: Rng + ?Sized>(
        &mut self,
        tile: Tile,
        condition: Condition<'_>,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Position>> {
        let options = PlacementOptions::default().with_condition(condition);
        self.place_randomly(tile, count, &options, rng)
    }

    /// Place checkpoints `0..count` once each
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `count` exceeds the number of checkpoint groups,
    /// otherwise as [`MapGrid::place_randomly`]. No checkpoint is left behind
    /// on failure.
    pub fn place_checkpoints<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        options: &PlacementOptions<'_>,
        rng: &mut R,
    ) -> Result<Vec<Position>> {
        check_group_count(count)?;

        self.atomically(|grid| {
            let mut positions = Vec::with_capacity(count);
            for group in 0..count {
                if let Some(tile) = Tile::checkpoint(group) {
                    positions.extend(grid.place_randomly(tile, 1, options, rng)?);
                }
            }
            Ok(positions)
        })
    }

    /// Place teleporter groups `0..count`
    ///
    /// Each group gets one input and `outputs(group)` outputs, with zero treated
    /// as one. Every output is an independent random placement.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `count` exceeds the number of teleporter groups,
    /// otherwise as [`MapGrid::place_randomly`]. No teleporter is left behind
    /// on failure.
    pub fn place_teleporters<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        options: &PlacementOptions<'_>,
        outputs: impl Fn(usize) -> usize,
        rng: &mut R,
    ) -> Result<Vec<TeleporterPlacement>> {
        check_group_count(count)?;

        self.atomically(|grid| {
            let mut placements = Vec::with_capacity(count);
            for group in 0..count {
                let (Some(input_tile), Some(output_tile)) =
                    (Tile::teleport_in(group), Tile::teleport_out(group))
                else {
                    continue;
                };

                let input = grid
                    .place_randomly(input_tile, 1, options, rng)?
                    .first()
                    .copied()
                    .unwrap_or_default();

                let mut output_cells = Vec::new();
                for _ in 0..outputs(group).max(1) {
                    output_cells.extend(grid.place_randomly(output_tile, 1, options, rng)?);
                }

                placements.push(TeleporterPlacement {
                    group,
                    input,
                    outputs: output_cells,
                });
            }
            Ok(placements)
        })
    }

    /// Turn each empty cell into a rock with probability `probability`
    ///
    /// Returns the number of rocks placed.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `probability` is outside `[0, 1]`
    pub fn place_rocks<R: Rng + ?Sized>(&mut self, probability: f64, rng: &mut R) -> Result<usize> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(invalid_argument(
                "probability",
                &probability,
                &"must be between 0 and 1",
            ));
        }

        let mut placed = 0;
        for cell in self.cells_mut() {
            if cell.is_empty() && rng.random_bool(probability) {
                *cell = ROCK;
                placed += 1;
            }
        }
        Ok(placed)
    }

    fn is_eligible(&self, i: usize, j: usize, condition: Option<Condition<'_>>) -> bool {
        self.get(i, j).is_ok_and(Tile::is_empty)
            && condition.is_none_or(|accepts| accepts(self, i, j))
    }

    fn free_cells_in(&self, columns: &[usize], rows: &[usize]) -> usize {
        let mut columns = columns.to_vec();
        let mut rows = rows.to_vec();
        columns.sort_unstable();
        columns.dedup();
        rows.sort_unstable();
        rows.dedup();

        columns
            .iter()
            .flat_map(|&i| rows.iter().map(move |&j| (i, j)))
            .filter(|&(i, j)| self.get(i, j).is_ok_and(Tile::is_empty))
            .count()
    }

    fn atomically<T>(&mut self, operation: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let snapshot = self.clone();
        let result = operation(self);
        if result.is_err() {
            *self = snapshot;
        }
        result
    }
}

fn candidates(
    requested: Option<&[usize]>,
    limit: usize,
    parameter: &'static str,
) -> Result<Vec<usize>> {
    let Some(values) = requested else {
        return Ok((0..limit).collect());
    };

    if values.is_empty() {
        return Err(invalid_argument(parameter, &"[]", &"candidate set is empty"));
    }
    if let Some(value) = values.iter().find(|&&value| value >= limit) {
        return Err(invalid_argument(
            parameter,
            value,
            &format!("must be below {limit}"),
        ));
    }
    Ok(values.to_vec())
}

fn check_group_count(count: usize) -> Result<()> {
    if count > CHECKPOINT_GROUPS {
        return Err(invalid_argument(
            "count",
            &count,
            &format!("at most {CHECKPOINT_GROUPS} groups exist"),
        ));
    }
    Ok(())
}
