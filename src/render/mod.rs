//! Rendering
//!
//! Text output for finished grids.

pub mod ascii;

pub use ascii::{render_ascii, render_legend};
