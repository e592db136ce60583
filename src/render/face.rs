//! Card face: bordered white card, corner indices, large centered suit

use super::shapes::{fill_rect, outline_rect};
use crate::catalog::{Rank, Suit};
use crate::constants::*;
use crate::fonts::{CardFont, Fonts};
use image::{Rgb, RgbImage};
use tracing::warn;

/// Width of the column the bottom-right index is centered in
const INDEX_COLUMN: i32 = 16;
/// Index text stays left of the two-pixel border and the inner outline
const INDEX_RIGHT_LIMIT: i32 = CARD_WIDTH as i32 - 3;
/// Gap from the top of the center suit to the rank below it
const CENTER_RANK_OFFSET: i32 = 35;

pub fn render_face(suit: Suit, rank: Rank, fonts: &Fonts) -> RgbImage {
    let (w, h) = (CARD_WIDTH as i32, CARD_HEIGHT as i32);
    let mut img = RgbImage::from_pixel(CARD_WIDTH, CARD_HEIGHT, FACE_BACKGROUND);

    draw_frame(&mut img, w, h);

    let color = suit.color();
    let symbol = suit.symbol().to_string();
    let rank = rank.code();

    // Top-left index
    draw_text(&mut img, &fonts.rank, 6, 2, color, rank);
    draw_text(&mut img, &fonts.small, 6, 18, color, &symbol);

    // Center suit, rank underneath
    let center_y = match fonts.suit.measure(&symbol) {
        Ok(b) => {
            let x = (w - b.width as i32) / 2;
            let y = (h - b.height as i32) / 2;
            draw_text(&mut img, &fonts.suit, x, y, color, &symbol);
            y
        }
        Err(e) => {
            warn!("Skipping center {} symbol: {}", suit.name(), e);
            (h - SUIT_FONT_SIZE as i32) / 2
        }
    };
    match fonts.rank.measure(rank) {
        Ok(b) => {
            let x = (w - b.width as i32) / 2;
            draw_text(&mut img, &fonts.rank, x, center_y + CENTER_RANK_OFFSET, color, rank);
        }
        Err(e) => warn!("Skipping center rank {:?}: {}", rank, e),
    }

    // Bottom-right index
    let column = w - 20;
    draw_centered_in(&mut img, &fonts.rank, column, h - 30, color, rank);
    draw_centered_in(&mut img, &fonts.small, column, h - 15, color, &symbol);

    // Decorative corner dots
    fill_rect(&mut img, (2, 2, 4, 4), FACE_CORNER_DOT);
    fill_rect(&mut img, (w - 5, 2, w - 3, 4), FACE_CORNER_DOT);
    fill_rect(&mut img, (2, h - 5, 4, h - 3), FACE_CORNER_DOT);
    fill_rect(&mut img, (w - 5, h - 5, w - 3, h - 3), FACE_CORNER_DOT);

    img
}

/// Graded corners, inner white panel and the two-tone outer border
fn draw_frame(img: &mut RgbImage, w: i32, h: i32) {
    let r = FACE_CORNER_RADIUS;
    for i in 0..r {
        let g = (240 - i * 20) as u8;
        let gray = Rgb([g, g, g]);
        fill_rect(img, (i, i, r, r), gray);
        fill_rect(img, (w - r, i, w - i, r), gray);
        fill_rect(img, (i, h - r, r, h - i), gray);
        fill_rect(img, (w - r, h - r, w - i, h - i), gray);
    }

    fill_rect(img, (3, 3, w - 4, h - 4), FACE_BACKGROUND);
    outline_rect(img, (3, 3, w - 4, h - 4), FACE_INNER_OUTLINE, 1);

    outline_rect(img, (0, 0, w - 1, h - 1), FACE_BORDER_DARK, 2);
    outline_rect(img, (1, 1, w - 2, h - 2), FACE_BORDER_LIGHT, 1);
}

fn draw_text(img: &mut RgbImage, font: &CardFont, x: i32, y: i32, color: Rgb<u8>, text: &str) {
    if let Err(e) = font.draw(img, x, y, color, text) {
        warn!("Skipping card text {:?}: {}", text, e);
    }
}

/// Center `text` horizontally in the index column starting at `x`
fn draw_centered_in(
    img: &mut RgbImage,
    font: &CardFont,
    x: i32,
    y: i32,
    color: Rgb<u8>,
    text: &str,
) {
    match font.measure(text) {
        Ok(b) => {
            // Wider text spills to both sides, but never onto the border
            let offset = (INDEX_COLUMN - b.width as i32) / 2;
            let x = (x + offset).min(INDEX_RIGHT_LIMIT - b.width as i32);
            draw_text(img, font, x, y, color, text);
        }
        Err(e) => warn!("Skipping card text {:?}: {}", text, e),
    }
}
