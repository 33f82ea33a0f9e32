//! Terminal output formatting
//!
//! Tile rendering for the guess grid.

pub mod tiles;

pub use tiles::{PLACEHOLDER, Palette, TileRenderer};
