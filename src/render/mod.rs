//! Rasterizers for each kind of asset
//!
//! Each call builds and returns its own canvas. Text is best-effort: a failed
//! draw is logged and the rest of the image is still produced.

pub mod back;
pub mod face;
pub mod shapes;
pub mod table;

pub use back::render_back;
pub use face::render_face;
pub use table::render_table;

use crate::catalog::AssetDescriptor;
use crate::fonts::Fonts;
use image::RgbImage;

/// Render any catalog entry. `label` is only used for the table.
pub fn render(asset: AssetDescriptor, fonts: &Fonts, label: &str) -> RgbImage {
    match asset {
        AssetDescriptor::Face { suit, rank } => render_face(suit, rank, fonts),
        AssetDescriptor::Back => render_back(),
        AssetDescriptor::Table => render_table(fonts, label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn rendered_sizes_match_descriptors() {
        let fonts = Fonts::builtin();
        for asset in catalog::all() {
            let img = render(asset, &fonts, "POKER");
            assert_eq!(img.dimensions(), asset.dimensions(), "{}", asset);
        }
    }

    #[test]
    fn outline_fonts_render_every_asset() {
        let Some(fonts) = Fonts::system() else {
            return;
        };
        for asset in catalog::all() {
            let img = render(asset, &fonts, "POKER");
            assert_eq!(img.dimensions(), asset.dimensions(), "{}", asset);
            if let AssetDescriptor::Face { suit, .. } = asset {
                assert!(img.pixels().any(|p| *p == suit.color()), "{}", asset);
            }
        }
    }
}
