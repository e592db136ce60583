//! Error types for asset generation

use std::path::PathBuf;
use thiserror::Error;

/// Text rendering errors. Always recoverable: callers skip the text.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The font has no glyph for a character in the text
    #[error("font has no glyph for {ch:?} in {text:?}")]
    MissingGlyph { ch: char, text: String },

    /// Nothing to measure or draw
    #[error("empty text")]
    EmptyText,
}

/// Configuration file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Fatal errors for a generation run
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("could not create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not save {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result type for generation runs
pub type Result<T> = std::result::Result<T, GenerateError>;
