//! Card Assets - procedural PNG assets for a card game
//!
//! Renders 52 card faces, a card back and a table background with
//! image/imageproc and writes them under fixed file names.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod fonts;
pub mod generate;
pub mod render;

// Re-export commonly used types for convenience
pub use catalog::{AssetDescriptor, Rank, Suit};
pub use config::{FontConfig, GeneratorConfig};
pub use error::{ConfigError, GenerateError, RenderError};
pub use fonts::{CardFont, FontCandidate, FontResolver, Fonts, TextBounds};
pub use generate::{AssetSelection, GenerationReport, Generator};
