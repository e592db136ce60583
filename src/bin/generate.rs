//! Card asset generator
//!
//! Writes 52 card faces, the card back and the table background as PNGs.
//!
//! Usage:
//!   cargo run --bin generate                    # Everything into ./res
//!   cargo run --bin generate -- -o assets/res   # Different output directory
//!   cargo run --bin generate -- --only table    # Just the table
//!   cargo run --bin generate -- --font /path/to/Font.ttf

use card_assets::constants::DEFAULT_CONFIG_FILE;
use card_assets::generate::{AssetSelection, Generator};
use card_assets::GeneratorConfig;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Generate playing card and table images
#[derive(Parser)]
#[command(name = "generate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output directory (overrides the config file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Font file to try before the configured candidates (repeatable)
    #[arg(long = "font")]
    fonts: Vec<String>,

    /// Only generate part of the set
    #[arg(long, value_enum)]
    only: Option<Only>,

    /// Table label text (empty for none)
    #[arg(long)]
    label: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Only {
    /// The 52 card faces
    Faces,
    /// The card back
    Back,
    /// The table background
    Table,
}

impl From<Only> for AssetSelection {
    fn from(only: Only) -> Self {
        match only {
            Only::Faces => AssetSelection::Faces,
            Only::Back => AssetSelection::Back,
            Only::Table => AssetSelection::Table,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = GeneratorConfig::load_or_default(&cli.config)?;
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if let Some(label) = cli.label {
        config.table_label = label;
    }
    if !cli.fonts.is_empty() {
        let mut candidates = cli.fonts;
        candidates.append(&mut config.fonts.candidates);
        config.fonts.candidates = candidates;
    }
    config.quiet |= cli.quiet;

    let selection = cli.only.map(AssetSelection::from).unwrap_or_default();
    Generator::new(config).selection(selection).run()?;

    Ok(())
}
