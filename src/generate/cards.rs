//! Card and table asset generator
//!
//! Renders every catalog entry and writes it to the output directory.
//! Directory or file write failures abort the run.

use crate::catalog::{self, AssetDescriptor, Suit};
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::fonts::{FontResolver, Fonts};
use crate::render;
use image::RgbImage;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Which part of the catalog to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetSelection {
    #[default]
    All,
    Faces,
    Back,
    Table,
}

impl AssetSelection {
    pub fn includes(self, asset: AssetDescriptor) -> bool {
        match self {
            AssetSelection::All => true,
            AssetSelection::Faces => asset.is_face(),
            AssetSelection::Back => asset == AssetDescriptor::Back,
            AssetSelection::Table => asset == AssetDescriptor::Table,
        }
    }
}

/// What a run wrote
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Face images written
    pub faces: usize,
    /// Every file written, in order
    pub written: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn total(&self) -> usize {
        self.written.len()
    }
}

pub struct Generator {
    config: GeneratorConfig,
    fonts: Fonts,
    selection: AssetSelection,
}

impl Generator {
    /// Resolve fonts from the config's candidates
    pub fn new(config: GeneratorConfig) -> Self {
        let resolver = FontResolver::from_config(&config.fonts);
        let fonts = Fonts::resolve(&resolver);
        Self::with_fonts(config, fonts)
    }

    pub fn with_fonts(config: GeneratorConfig, fonts: Fonts) -> Self {
        Self {
            config,
            fonts,
            selection: AssetSelection::All,
        }
    }

    pub fn selection(mut self, selection: AssetSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    pub fn run(&self) -> Result<GenerationReport> {
        let out = self.output_dir();
        fs::create_dir_all(out).map_err(|source| GenerateError::CreateDir {
            path: out.to_path_buf(),
            source,
        })?;
        info!("Writing assets to {}", out.display());

        let mut report = GenerationReport::default();

        self.say(&"=".repeat(50));
        self.say("  CARD ASSET GENERATOR");
        self.say(&"=".repeat(50));

        // Faces come suit by suit; one progress line per suit
        let mut open: Option<(Suit, usize)> = None;
        for asset in catalog::all() {
            if !self.selection.includes(asset) {
                continue;
            }
            match asset.suit() {
                Some(suit) => {
                    match open {
                        Some((current, _)) if current == suit => {}
                        Some((_, count)) => {
                            self.say(&format!("✓ ({} cards)", count));
                            self.progress(&format!("  Creating {}... ", suit.name()));
                            open = Some((suit, 0));
                        }
                        None => {
                            self.say("\nGenerating card images...\n");
                            self.progress(&format!("  Creating {}... ", suit.name()));
                            open = Some((suit, 0));
                        }
                    }
                    self.write(asset, &mut report)?;
                    report.faces += 1;
                    if let Some((_, count)) = open.as_mut() {
                        *count += 1;
                    }
                }
                None => {
                    if let Some((_, count)) = open.take() {
                        self.close_faces(count, report.faces);
                    }
                    self.progress(match asset {
                        AssetDescriptor::Back => "\nGenerating card back... ",
                        _ => "Generating table... ",
                    });
                    self.write(asset, &mut report)?;
                    self.say("✓");
                }
            }
        }
        if let Some((_, count)) = open {
            self.close_faces(count, report.faces);
        }

        self.say(&format!("\n{}", "=".repeat(50)));
        self.say("  ALL ASSETS GENERATED");
        self.say(&"=".repeat(50));
        self.say(&format!("\nLocation: {}", out.display()));
        self.say(&format!("Total files: {}", report.total()));

        info!(
            "Generated {} files ({} faces)",
            report.total(),
            report.faces
        );
        Ok(report)
    }

    fn write(&self, asset: AssetDescriptor, report: &mut GenerationReport) -> Result<()> {
        let img = render::render(asset, &self.fonts, &self.config.table_label);
        let path = self.output_dir().join(asset.file_name());
        save(&img, &path)?;
        debug!("Wrote {} -> {}", asset, path.display());
        report.written.push(path);
        Ok(())
    }

    fn close_faces(&self, suit_count: usize, faces: usize) {
        self.say(&format!("✓ ({} cards)", suit_count));
        self.say(&format!("\nCreated {} card face images", faces));
    }

    fn say(&self, line: &str) {
        if !self.config.quiet {
            println!("{}", line);
        }
    }

    /// Print without a newline; the matching `say` finishes the line
    fn progress(&self, text: &str) {
        if !self.config.quiet {
            print!("{}", text);
            let _ = std::io::stdout().flush();
        }
    }
}

fn save(img: &RgbImage, path: &Path) -> Result<()> {
    img.save(path).map_err(|source| GenerateError::Save {
        path: path.to_path_buf(),
        source,
    })
}

/// Generate everything the config describes
pub fn run(config: GeneratorConfig) -> Result<GenerationReport> {
    Generator::new(config).run()
}
