//! Best-effort font lookup
//!
//! Candidates are tried in order: bare file names are read relative to the
//! working directory and then searched for in the font directories, anything
//! else is read as a path. The first font
//! that loads wins. Nothing here returns an error; if no candidate loads, the
//! built-in bitmap font is used.

use super::CardFont;
use crate::config::FontConfig;
use ab_glyph::FontArc;
use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// How deep to descend into font directories (e.g. truetype/dejavu/)
const MAX_SEARCH_DEPTH: usize = 4;

/// Searched first: a common name, then the known Linux, Windows and macOS paths
pub const DEFAULT_CANDIDATES: &[&str] = &[
    "arial.ttf",
    "DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    r"C:\Windows\Fonts\arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontCandidate {
    /// File name, tried as given and then in the search directories
    Name(String),
    /// Explicit file path
    Path(PathBuf),
}

impl FontCandidate {
    pub fn parse(s: &str) -> Self {
        if s.contains('/') || s.contains('\\') {
            FontCandidate::Path(PathBuf::from(s))
        } else {
            FontCandidate::Name(s.to_string())
        }
    }
}

pub struct FontResolver {
    candidates: Vec<FontCandidate>,
    search_dirs: Vec<PathBuf>,
    // Resolved once; `None` inside means every candidate failed
    resolved: OnceCell<Option<FontArc>>,
}

impl FontResolver {
    pub fn new(candidates: Vec<FontCandidate>, search_dirs: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            search_dirs,
            resolved: OnceCell::new(),
        }
    }

    /// Default candidates searched in the platform's font directories
    pub fn standard() -> Self {
        Self::new(
            DEFAULT_CANDIDATES.iter().map(|s| FontCandidate::parse(s)).collect(),
            standard_font_dirs(),
        )
    }

    /// Resolver that never finds anything and always yields the bitmap font
    pub fn builtin_only() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn from_config(config: &FontConfig) -> Self {
        let candidates = config
            .candidates
            .iter()
            .map(|s| FontCandidate::parse(s))
            .collect();
        let mut search_dirs = config.search_dirs.clone();
        if config.standard_dirs {
            search_dirs.extend(standard_font_dirs());
        }
        Self::new(candidates, search_dirs)
    }

    /// Font at `size` pixels. Never fails.
    pub fn resolve(&self, size: f32) -> CardFont {
        match self.resolved.get_or_init(|| self.load_first()) {
            Some(font) => CardFont::outline(font.clone(), size),
            None => CardFont::builtin(size),
        }
    }

    /// Path of the first candidate that loads, without caching it
    #[cfg(test)]
    pub(crate) fn resolved_path(&self) -> Option<PathBuf> {
        self.candidates
            .iter()
            .filter_map(|c| self.locate(c))
            .find(|path| load_font(path).is_ok())
    }

    fn load_first(&self) -> Option<FontArc> {
        for candidate in &self.candidates {
            let Some(path) = self.locate(candidate) else {
                debug!("Font {:?} not found", candidate);
                continue;
            };
            match load_font(&path) {
                Ok(font) => {
                    info!("Using font {}", path.display());
                    return Some(font);
                }
                Err(e) => debug!("Skipping font {}: {}", path.display(), e),
            }
        }
        info!("No system font found, using built-in bitmap font");
        None
    }

    fn locate(&self, candidate: &FontCandidate) -> Option<PathBuf> {
        match candidate {
            FontCandidate::Path(path) => path.is_file().then(|| path.clone()),
            FontCandidate::Name(name) => {
                let local = Path::new(name);
                if local.is_file() {
                    return Some(local.to_path_buf());
                }
                self.search_dirs
                    .iter()
                    .find_map(|dir| find_file(dir, name, MAX_SEARCH_DEPTH))
            }
        }
    }
}

fn load_font(path: &Path) -> Result<FontArc, String> {
    let data = fs::read(path).map_err(|e| e.to_string())?;
    FontArc::try_from_vec(data).map_err(|e| e.to_string())
}

/// Case-insensitive recursive search for a file name
fn find_file(dir: &Path, name: &str, depth: usize) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    let mut subdirs = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else if entry
            .file_name()
            .to_str()
            .is_some_and(|f| f.eq_ignore_ascii_case(name))
        {
            return Some(path);
        }
    }
    if depth == 0 {
        return None;
    }
    subdirs.sort();
    subdirs
        .iter()
        .find_map(|sub| find_file(sub, name, depth - 1))
}

/// Font directories for the current platform
pub fn standard_font_dirs() -> Vec<PathBuf> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let mut dirs = Vec::new();

    if cfg!(target_os = "windows") {
        let windir = std::env::var_os("WINDIR").unwrap_or_else(|| r"C:\Windows".into());
        dirs.push(PathBuf::from(windir).join("Fonts"));
        if let Some(local) = std::env::var_os("LOCALAPPDATA") {
            dirs.push(PathBuf::from(local).join(r"Microsoft\Windows\Fonts"));
        }
    } else if cfg!(target_os = "macos") {
        dirs.push(PathBuf::from("/System/Library/Fonts"));
        dirs.push(PathBuf::from("/Library/Fonts"));
        if let Some(home) = &home {
            dirs.push(home.join("Library/Fonts"));
        }
    } else {
        dirs.push(PathBuf::from("/usr/share/fonts"));
        dirs.push(PathBuf::from("/usr/local/share/fonts"));
        if let Some(home) = &home {
            dirs.push(home.join(".local/share/fonts"));
            dirs.push(home.join(".fonts"));
        }
    }

    dirs
}
