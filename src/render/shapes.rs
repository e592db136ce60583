//! Drawing helpers on top of imageproc
//!
//! Boxes are inclusive corner coordinates `(x0, y0, x1, y1)`. Outline widths
//! grow inward from the box edge.

use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_hollow_ellipse_mut,
    draw_hollow_polygon_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;

/// Inclusive box; degenerate boxes yield `None`
fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Option<Rect> {
    if x1 < x0 || y1 < y0 {
        return None;
    }
    Some(Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32))
}

pub fn fill_rect(img: &mut RgbImage, (x0, y0, x1, y1): (i32, i32, i32, i32), color: Rgb<u8>) {
    if let Some(r) = rect(x0, y0, x1, y1) {
        draw_filled_rect_mut(img, r, color);
    }
}

pub fn outline_rect(
    img: &mut RgbImage,
    (x0, y0, x1, y1): (i32, i32, i32, i32),
    color: Rgb<u8>,
    width: i32,
) {
    for k in 0..width {
        if let Some(r) = rect(x0 + k, y0 + k, x1 - k, y1 - k) {
            draw_hollow_rect_mut(img, r, color);
        }
    }
}

pub fn outline_ellipse(
    img: &mut RgbImage,
    (x0, y0, x1, y1): (i32, i32, i32, i32),
    color: Rgb<u8>,
    width: i32,
) {
    let center = ((x0 + x1) / 2, (y0 + y1) / 2);
    let (rx, ry) = ((x1 - x0) / 2, (y1 - y0) / 2);
    for k in 0..width {
        if rx - k > 0 && ry - k > 0 {
            draw_hollow_ellipse_mut(img, center, rx - k, ry - k, color);
        }
    }
}

pub fn fill_ellipse(
    img: &mut RgbImage,
    (x0, y0, x1, y1): (i32, i32, i32, i32),
    fill: Rgb<u8>,
    outline: Rgb<u8>,
    width: i32,
) {
    let center = ((x0 + x1) / 2, (y0 + y1) / 2);
    draw_filled_ellipse_mut(img, center, (x1 - x0) / 2, (y1 - y0) / 2, fill);
    outline_ellipse(img, (x0, y0, x1, y1), outline, width);
}

/// Diamond with vertices `half` pixels from the center along each axis
pub fn diamond(
    img: &mut RgbImage,
    (cx, cy): (i32, i32),
    half: i32,
    fill: Rgb<u8>,
    outline: Rgb<u8>,
    width: i32,
) {
    if half <= 0 {
        return;
    }
    let points = [
        Point::new(cx, cy - half),
        Point::new(cx + half, cy),
        Point::new(cx, cy + half),
        Point::new(cx - half, cy),
    ];
    draw_polygon_mut(img, &points, fill);

    for k in 0..width.min(half) {
        let h = (half - k) as f32;
        let (cx, cy) = (cx as f32, cy as f32);
        let ring = [
            Point::new(cx, cy - h),
            Point::new(cx + h, cy),
            Point::new(cx, cy + h),
            Point::new(cx - h, cy),
        ];
        draw_hollow_polygon_mut(img, &ring, outline);
    }
}

pub fn line(img: &mut RgbImage, start: (i32, i32), end: (i32, i32), color: Rgb<u8>) {
    draw_line_segment_mut(
        img,
        (start.0 as f32, start.1 as f32),
        (end.0 as f32, end.1 as f32),
        color,
    );
}
