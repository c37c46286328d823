//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by dungeon generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Invalid grid dimensions {rows}x{cols}: both must be positive")]
    InvalidGridDimensions { rows: usize, cols: usize },

    #[error("Unsupported worm count {worms}: expected 2 to 4")]
    InvalidWormCount { worms: usize },

    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),

    #[error("No valid dungeon after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Errors raised while loading or writing a generator config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
}
