//! Card back: navy field, gold borders, tiled diamonds, one large center diamond

use super::shapes::{diamond, line, outline_rect};
use crate::constants::*;
use image::RgbImage;

pub fn render_back() -> RgbImage {
    let (w, h) = (CARD_WIDTH as i32, CARD_HEIGHT as i32);
    let mut img = RgbImage::from_pixel(CARD_WIDTH, CARD_HEIGHT, BACK_BACKGROUND);

    outline_rect(&mut img, (0, 0, w - 1, h - 1), BACK_GOLD, 3);
    outline_rect(&mut img, (3, 3, w - 4, h - 4), BACK_BRIGHT_GOLD, 1);
    outline_rect(&mut img, (6, 6, w - 7, h - 7), BACK_FRAME, 2);

    for y in (10..h - 10).step_by(BACK_TILE_PITCH) {
        for x in (10..w - 10).step_by(BACK_TILE_PITCH) {
            diamond(&mut img, (x, y), BACK_TILE_HALF, BACK_PATTERN, BACK_FRAME, 1);
        }
    }

    diamond(
        &mut img,
        (w / 2, h / 2),
        BACK_CENTER_HALF,
        BACK_BRIGHT_GOLD,
        BACK_GOLD,
        2,
    );

    // Accent lines go over everything inside the frame
    for x in (12..w - 12).step_by(BACK_LINE_PITCH) {
        line(&mut img, (x, 10), (x, h - 10), BACK_ACCENT_LINE);
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_has_card_dimensions() {
        assert_eq!(render_back().dimensions(), (CARD_WIDTH, CARD_HEIGHT));
    }

    #[test]
    fn back_is_deterministic() {
        assert_eq!(render_back().as_raw(), render_back().as_raw());
    }

    #[test]
    fn back_layers() {
        let img = render_back();
        assert_eq!(*img.get_pixel(0, 0), BACK_GOLD);
        assert_eq!(*img.get_pixel(3, 50), BACK_BRIGHT_GOLD);
        assert_eq!(*img.get_pixel(6, 50), BACK_FRAME);
        // Tile centers at (10 + 15k, 10 + 15k); (25, 25) is one, off the accent lines
        assert_eq!(*img.get_pixel(25, 25), BACK_PATTERN);
        assert_eq!(*img.get_pixel(12, 40), BACK_ACCENT_LINE);
        // Center diamond, just off the accent line at x = 36
        assert_eq!(*img.get_pixel(38, 60), BACK_BRIGHT_GOLD);
    }
}
