//! World module
//!
//! Contains the grid, room kinds, statistics and procedural generation.

pub mod map;
pub mod tile;
pub mod stats;
pub mod generation;

pub use map::{Coord, Grid};
pub use tile::RoomKind;
pub use stats::DungeonStats;
