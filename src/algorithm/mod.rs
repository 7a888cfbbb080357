/// Header counts derived from painted grids
pub mod census;
/// Capped regenerate-and-evaluate loop
pub mod generation;
/// Constrained random placement by rejection sampling
pub mod placement;
