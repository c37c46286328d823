//! Wormdig - seedable worm-digging dungeon layouts
//!
//! Worms carve corridors out of an empty grid, then dead ends become
//! treasure and boss rooms and hidden pockets become secret rooms.

pub mod error;
pub mod world;
pub mod progression;
pub mod render;
pub mod analysis;
pub mod data;

// Re-export commonly used types
pub use error::{ConfigError, GenerationError};
pub use world::generation::{
    generate_dungeon, generate_dungeon_for_level, CarvePolicy, Dungeon, DungeonGenerator,
    GeneratorConfig,
};
pub use world::{Coord, Grid, RoomKind};
