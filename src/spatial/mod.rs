//! Spatial data structures
//!
//! This module contains the map representation:
//! - The tile catalog
//! - The dense tile grid and its indexing
//! - Integer dilation of grids

/// Integer upscaling of grids
pub mod dilation;
/// Dense tile grid with coordinate indexing and bulk mutation
pub mod grid;
/// Tile catalog and symbol groups
pub mod tiles;

pub use grid::MapGrid;
pub use tiles::Tile;
