//! External data
//!
//! Generator configuration stored as RON.

pub mod loader;

pub use loader::{
    config_to_ron, default_config_path, export_default_config, load_config, load_or_default,
    parse_config, CONFIG_FILE,
};
