//! Procedural grid puzzle maps with compact map codes
//!
//! Maps are dense tile grids painted directly or filled by constrained random
//! placement. They serialize to a run-length map code that round-trips
//! exactly, wrap cleanly for forum posts, and can be upscaled by dilation.

#![forbid(unsafe_code)]

/// Header counts, random placement and the capped generation loop
pub mod algorithm;
/// Map codes, forum formatting, configuration and error handling
pub mod io;
/// Ready-made map scenarios
pub mod scenarios;
/// Tile catalog, grid and dilation
pub mod spatial;

pub use algorithm::generation::{Evaluator, MapGenerator, ScoredMap, generate_scored};
pub use algorithm::placement::{PlacementOptions, Position};
pub use io::codec::{decode, encode};
pub use io::error::{MapError, Result};
pub use spatial::{MapGrid, Tile};
