//! Fixed dimensions, colors and font sizes for the generated assets
//!
//! Every drawing coordinate in `render` is expressed relative to these.

use image::Rgb;

// =============================================================================
// DIMENSIONS
// =============================================================================

pub const CARD_WIDTH: u32 = 80;
pub const CARD_HEIGHT: u32 = 120;
pub const TABLE_WIDTH: u32 = 1024;
pub const TABLE_HEIGHT: u32 = 768;

// =============================================================================
// OUTPUT
// =============================================================================

pub const DEFAULT_OUTPUT_DIR: &str = "res";
pub const CARD_BACK_FILE: &str = "card_back.png";
pub const TABLE_FILE: &str = "table.png";
pub const DEFAULT_CONFIG_FILE: &str = "card_assets.toml";
pub const DEFAULT_TABLE_LABEL: &str = "POKER";

// =============================================================================
// FONT SIZES (pixels)
// =============================================================================

pub const RANK_FONT_SIZE: f32 = 16.0;
pub const SUIT_FONT_SIZE: f32 = 32.0;
pub const SMALL_FONT_SIZE: f32 = 10.0;
pub const LABEL_FONT_SIZE: f32 = 20.0;

// =============================================================================
// SUIT COLORS
// =============================================================================

pub const HEARTS_COLOR: Rgb<u8> = Rgb([220, 20, 60]); // Crimson
pub const DIAMONDS_COLOR: Rgb<u8> = Rgb([255, 69, 0]); // Red-orange
pub const CLUBS_COLOR: Rgb<u8> = Rgb([25, 25, 25]); // Near black
pub const SPADES_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

// =============================================================================
// CARD FACE
// =============================================================================

pub const FACE_BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const FACE_INNER_OUTLINE: Rgb<u8> = Rgb([200, 200, 200]);
pub const FACE_BORDER_DARK: Rgb<u8> = Rgb([100, 100, 100]);
pub const FACE_BORDER_LIGHT: Rgb<u8> = Rgb([180, 180, 180]);
pub const FACE_CORNER_DOT: Rgb<u8> = Rgb([240, 240, 240]);
pub const FACE_CORNER_RADIUS: i32 = 5;

// =============================================================================
// CARD BACK
// =============================================================================

pub const BACK_BACKGROUND: Rgb<u8> = Rgb([25, 50, 120]); // Rich blue
pub const BACK_GOLD: Rgb<u8> = Rgb([218, 165, 32]); // Goldenrod
pub const BACK_BRIGHT_GOLD: Rgb<u8> = Rgb([255, 215, 0]);
pub const BACK_FRAME: Rgb<u8> = Rgb([100, 149, 237]); // Cornflower
pub const BACK_PATTERN: Rgb<u8> = Rgb([70, 130, 180]); // Steel blue
pub const BACK_ACCENT_LINE: Rgb<u8> = Rgb([50, 80, 140]);
pub const BACK_TILE_PITCH: usize = 15;
pub const BACK_TILE_HALF: i32 = 4;
pub const BACK_CENTER_HALF: i32 = 15;
pub const BACK_LINE_PITCH: usize = 8;

// =============================================================================
// TABLE
// =============================================================================

pub const FELT: Rgb<u8> = Rgb([0, 120, 50]);
pub const FELT_DARK: Rgb<u8> = Rgb([0, 100, 40]);
pub const FELT_GRADIENT_STEPS: i32 = 100;
pub const WOOD: Rgb<u8> = Rgb([139, 69, 19]); // Saddle brown
pub const WOOD_HIGHLIGHT: Rgb<u8> = Rgb([160, 82, 45]);
pub const WOOD_SHADOW: Rgb<u8> = Rgb([90, 50, 15]);
pub const TABLE_GOLD: Rgb<u8> = Rgb([255, 215, 0]);
pub const CORNER_MARK_INNER_OUTLINE: Rgb<u8> = Rgb([200, 200, 150]);
pub const TABLE_CORNER_MARKS: [(i32, i32); 4] = [(100, 100), (924, 100), (100, 668), (924, 668)];
