//! Progression systems

pub mod level;

pub use level::calc_max_rooms;
