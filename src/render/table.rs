//! Table background: green felt shaded by nested outlines, wooden rim,
//! corner marks and a dealer area with an optional label

use super::shapes::{fill_ellipse, outline_ellipse, outline_rect};
use crate::constants::*;
use crate::error::RenderError;
use crate::fonts::Fonts;
use image::{Rgb, RgbImage};
use tracing::warn;

pub fn render_table(fonts: &Fonts, label: &str) -> RgbImage {
    let (w, h) = (TABLE_WIDTH as i32, TABLE_HEIGHT as i32);
    let mut img = RgbImage::from_pixel(TABLE_WIDTH, TABLE_HEIGHT, FELT);

    // Nested outlines, one shade darker per step inward
    for i in 0..FELT_GRADIENT_STEPS {
        outline_rect(&mut img, (i, i, w - i, h - i), felt_shade(i), 1);
    }

    // Rim: wood, then highlight just inside, shadow just outside
    outline_ellipse(&mut img, (40, 40, w - 40, h - 40), WOOD, 15);
    outline_ellipse(&mut img, (42, 42, w - 42, h - 42), WOOD_HIGHLIGHT, 2);
    outline_ellipse(&mut img, (38, 38, w - 38, h - 38), WOOD_SHADOW, 3);

    for (cx, cy) in TABLE_CORNER_MARKS {
        outline_ellipse(&mut img, (cx - 10, cy - 10, cx + 10, cy + 10), TABLE_GOLD, 2);
        fill_ellipse(
            &mut img,
            (cx - 7, cy - 7, cx + 7, cy + 7),
            FELT_DARK,
            CORNER_MARK_INNER_OUTLINE,
            1,
        );
    }

    // Dealer area
    let (cx, cy) = (w / 2, h / 2);
    fill_ellipse(&mut img, (cx - 40, cy - 30, cx + 40, cy + 30), FELT_DARK, TABLE_GOLD, 2);

    if !label.is_empty() {
        if let Err(e) = draw_label(&mut img, fonts, (cx, cy), label) {
            warn!("Table label {:?} skipped: {}", label, e);
        }
    }

    img
}

/// Felt color `step` pixels in from the edge
fn felt_shade(step: i32) -> Rgb<u8> {
    let darkness = (step as f32 * 0.4) as i32;
    Rgb([
        0,
        (120 - darkness).max(0) as u8,
        (50 - darkness / 2).max(0) as u8,
    ])
}

fn draw_label(
    img: &mut RgbImage,
    fonts: &Fonts,
    (cx, cy): (i32, i32),
    label: &str,
) -> Result<(), RenderError> {
    let bounds = fonts.label.measure(label)?;
    let x = cx - bounds.width as i32 / 2;
    let y = cy - bounds.height as i32 / 2;
    fonts.label.draw(img, x, y, TABLE_GOLD, label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gold_in_dealer_area(img: &RgbImage) -> usize {
        let (cx, cy) = (TABLE_WIDTH / 2, TABLE_HEIGHT / 2);
        let mut count = 0;
        for y in cy - 15..cy + 15 {
            for x in cx - 30..cx + 30 {
                if *img.get_pixel(x, y) == TABLE_GOLD {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn table_has_table_dimensions() {
        let img = render_table(&Fonts::builtin(), DEFAULT_TABLE_LABEL);
        assert_eq!(img.dimensions(), (TABLE_WIDTH, TABLE_HEIGHT));
    }

    #[test]
    fn label_is_drawn_with_builtin_font() {
        let img = render_table(&Fonts::builtin(), "POKER");
        assert!(gold_in_dealer_area(&img) > 0);
    }

    #[test]
    fn label_failure_still_produces_table() {
        // The bitmap font has no glyph for this, so the label draw fails
        let img = render_table(&Fonts::builtin(), "♪♪♪");
        assert_eq!(img.dimensions(), (TABLE_WIDTH, TABLE_HEIGHT));
        assert_eq!(gold_in_dealer_area(&img), 0);
        assert_eq!(*img.get_pixel(TABLE_WIDTH / 2, TABLE_HEIGHT / 2), FELT_DARK);
    }

    #[test]
    fn empty_label_is_skipped() {
        let img = render_table(&Fonts::builtin(), "");
        assert_eq!(gold_in_dealer_area(&img), 0);
    }

    #[test]
    fn felt_shading_steps_inward() {
        let img = render_table(&Fonts::builtin(), "");
        let edge = img.get_pixel(0, TABLE_HEIGHT / 2)[1];
        let inner = img.get_pixel(30, TABLE_HEIGHT / 2)[1];
        assert!(edge > inner, "edge {} inner {}", edge, inner);
        assert_eq!(felt_shade(0), FELT);
        assert_eq!(felt_shade(99), Rgb([0, 81, 31]));
    }

    #[test]
    fn label_is_drawn_with_outline_font() {
        let Some(fonts) = Fonts::system() else {
            return;
        };
        let img = render_table(&fonts, DEFAULT_TABLE_LABEL);
        assert_eq!(img.dimensions(), (TABLE_WIDTH, TABLE_HEIGHT));
        assert!(gold_in_dealer_area(&img) > 0);
    }
}
