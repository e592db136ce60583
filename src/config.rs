//! Optional TOML configuration
//!
//! Every field has a default, so an absent file or a partial file is fine.
//!
//! ```toml
//! output_dir = "res"
//! table_label = "POKER"
//!
//! [fonts]
//! candidates = ["arial.ttf", "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"]
//! search_dirs = ["assets/fonts"]
//! standard_dirs = true
//! ```

use crate::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_TABLE_LABEL};
use crate::error::ConfigError;
use crate::fonts::resolver::DEFAULT_CANDIDATES;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory the images are written to (created if missing)
    pub output_dir: PathBuf,
    /// Text in the middle of the table; empty for none
    pub table_label: String,
    /// Suppress console progress lines
    pub quiet: bool,
    pub fonts: FontConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            table_label: DEFAULT_TABLE_LABEL.to_string(),
            quiet: false,
            fonts: FontConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Tried in order. Bare names are searched for, anything with a
    /// separator is read as a path.
    pub candidates: Vec<String>,
    /// Extra directories searched before the platform ones
    pub search_dirs: Vec<PathBuf>,
    /// Also search the platform's standard font directories
    pub standard_dirs: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            search_dirs: Vec::new(),
            standard_dirs: true,
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("Config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let config = Self::load(path)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = GeneratorConfig::from_toml_str("", Path::new("empty.toml")).unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.output_dir, PathBuf::from("res"));
        assert_eq!(config.table_label, "POKER");
        assert_eq!(config.fonts.candidates[0], "arial.ttf");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let toml = r#"
output_dir = "build/cards"

[fonts]
candidates = ["/opt/fonts/Card.ttf"]
standard_dirs = false
"#;
        let config = GeneratorConfig::from_toml_str(toml, Path::new("cards.toml")).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("build/cards"));
        assert_eq!(config.table_label, "POKER");
        assert_eq!(config.fonts.candidates, vec!["/opt/fonts/Card.ttf".to_string()]);
        assert!(!config.fonts.standard_dirs);
        assert!(config.fonts.search_dirs.is_empty());
    }

    #[test]
    fn invalid_toml_reports_path() {
        let err = GeneratorConfig::from_toml_str("output_dir = [", Path::new("broken.toml"))
            .expect_err("invalid toml");
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card_assets.toml");
        fs::write(&path, "table_label = \"\"\nquiet = true\n").unwrap();
        let config = GeneratorConfig::load_or_default(&path).unwrap();
        assert!(config.table_label.is_empty());
        assert!(config.quiet);
    }
}
