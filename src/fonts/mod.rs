//! Text fonts for card and table rendering
//!
//! A [`CardFont`] is either a scaled outline font found on the system or the
//! built-in bitmap font. Measuring and drawing go through the same API so the
//! renderer does not care which one it got.

pub mod builtin;
pub mod resolver;

pub use resolver::{FontCandidate, FontResolver};

use crate::constants::*;
use crate::error::RenderError;
use ab_glyph::{Font, FontArc, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::fmt;

/// Measured size of a piece of text in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBounds {
    pub width: u32,
    pub height: u32,
}

/// A font at a fixed pixel size
#[derive(Clone)]
pub enum CardFont {
    Outline { font: FontArc, scale: PxScale },
    Builtin { scale: u32 },
}

impl fmt::Debug for CardFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardFont::Outline { scale, .. } => write!(f, "Outline({}px)", scale.y),
            CardFont::Builtin { scale } => write!(f, "Builtin(x{})", scale),
        }
    }
}

impl CardFont {
    /// Built-in bitmap font approximating `size` pixels
    pub fn builtin(size: f32) -> Self {
        CardFont::Builtin {
            scale: builtin::scale_for_size(size),
        }
    }

    pub fn outline(font: FontArc, size: f32) -> Self {
        CardFont::Outline {
            font,
            scale: PxScale::from(size),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, CardFont::Builtin { .. })
    }

    /// Fails if the text is empty or the font lacks a glyph for any character
    fn check(&self, text: &str) -> Result<(), RenderError> {
        if text.is_empty() {
            return Err(RenderError::EmptyText);
        }
        let missing = match self {
            CardFont::Outline { font, .. } => text
                .chars()
                .find(|&c| !c.is_whitespace() && font.glyph_id(c).0 == 0),
            CardFont::Builtin { .. } => builtin::first_missing(text),
        };
        match missing {
            Some(ch) => Err(RenderError::MissingGlyph {
                ch,
                text: text.to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn measure(&self, text: &str) -> Result<TextBounds, RenderError> {
        self.check(text)?;
        let (width, height) = match self {
            CardFont::Outline { font, scale } => text_size(*scale, font, text),
            CardFont::Builtin { scale } => builtin::text_size(text, *scale),
        };
        Ok(TextBounds { width, height })
    }

    /// Draw `text` with its top-left at (x, y)
    pub fn draw(
        &self,
        img: &mut RgbImage,
        x: i32,
        y: i32,
        color: Rgb<u8>,
        text: &str,
    ) -> Result<(), RenderError> {
        self.check(text)?;
        match self {
            CardFont::Outline { font, scale } => draw_text_mut(img, color, x, y, *scale, font, text),
            CardFont::Builtin { scale } => builtin::draw_text(img, color, x, y, *scale, text),
        }
        Ok(())
    }
}

/// The four font sizes the renderer uses
#[derive(Debug, Clone)]
pub struct Fonts {
    pub rank: CardFont,
    pub suit: CardFont,
    pub small: CardFont,
    pub label: CardFont,
}

impl Fonts {
    pub fn resolve(resolver: &FontResolver) -> Self {
        Self {
            rank: resolver.resolve(RANK_FONT_SIZE),
            suit: resolver.resolve(SUIT_FONT_SIZE),
            small: resolver.resolve(SMALL_FONT_SIZE),
            label: resolver.resolve(LABEL_FONT_SIZE),
        }
    }

    /// Bitmap-only fonts; used when nothing else is wanted or found
    pub fn builtin() -> Self {
        Self {
            rank: CardFont::builtin(RANK_FONT_SIZE),
            suit: CardFont::builtin(SUIT_FONT_SIZE),
            small: CardFont::builtin(SMALL_FONT_SIZE),
            label: CardFont::builtin(LABEL_FONT_SIZE),
        }
    }

    /// Outline fonts from the standard candidates, or `None` when the
    /// machine has none installed
    #[cfg(test)]
    pub(crate) fn system() -> Option<Self> {
        let fonts = Self::resolve(&FontResolver::standard());
        if fonts.rank.is_builtin() {
            eprintln!("no system font installed, skipping outline font test");
            return None;
        }
        Some(fonts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_measures_rank_codes() {
        let font = CardFont::builtin(RANK_FONT_SIZE);
        let ten = font.measure("10").expect("measure 10");
        let ace = font.measure("A").expect("measure A");
        assert!(ten.width > ace.width);
        assert_eq!(ten.height, ace.height);
    }

    #[test]
    fn missing_glyph_is_an_error() {
        let font = CardFont::builtin(LABEL_FONT_SIZE);
        let mut img = RgbImage::new(50, 20);
        let err = font
            .draw(&mut img, 0, 0, Rgb([255, 0, 0]), "♪")
            .expect_err("no glyph for ♪");
        assert!(matches!(err, RenderError::MissingGlyph { ch: '♪', .. }));
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn empty_text_is_an_error() {
        let font = CardFont::builtin(RANK_FONT_SIZE);
        assert!(matches!(font.measure(""), Err(RenderError::EmptyText)));
    }

    #[test]
    fn builtin_draws_suit_symbols() {
        let font = CardFont::builtin(SUIT_FONT_SIZE);
        for symbol in ["♥", "♦", "♣", "♠"] {
            let mut img = RgbImage::new(40, 40);
            font.draw(&mut img, 2, 2, Rgb([220, 20, 60]), symbol)
                .expect("draw symbol");
            assert!(img.pixels().any(|p| p.0 == [220, 20, 60]), "{}", symbol);
        }
    }

    #[test]
    fn outline_font_measures_and_draws() {
        let Some(fonts) = Fonts::system() else {
            return;
        };
        let ten = fonts.rank.measure("10").expect("measure 10");
        let seven = fonts.rank.measure("7").expect("measure 7");
        assert!(ten.width > seven.width);
        assert!(ten.height > 0);

        let mut img = RgbImage::from_pixel(60, 40, Rgb([255, 255, 255]));
        fonts
            .rank
            .draw(&mut img, 4, 4, Rgb([0, 0, 0]), "10")
            .expect("draw 10");
        assert!(img.pixels().any(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn outline_font_reports_missing_glyph() {
        let Some(fonts) = Fonts::system() else {
            return;
        };
        let err = fonts
            .label
            .measure("A\u{10FFFD}")
            .expect_err("private use plane is unmapped");
        assert!(matches!(err, RenderError::MissingGlyph { ch: '\u{10FFFD}', .. }));
    }
}
