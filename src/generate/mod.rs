//! Asset generation
//!
//! Drives the catalog through the renderer and onto disk:
//! - 52 card faces
//! - Card back
//! - Table background

pub mod cards;

pub use cards::{AssetSelection, GenerationReport, Generator, run};
