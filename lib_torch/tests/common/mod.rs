#![allow(dead_code)]

use lib_torch::asset::format::ObjectRecord;

pub type Rgba = [u8; 4];

pub const CLEAR: Rgba = [0, 0, 0, 0];
pub const ORANGE: Rgba = [255, 128, 0, 255];
pub const YELLOW: Rgba = [255, 230, 60, 255];
pub const BROWN: Rgba = [110, 60, 20, 255];
pub const GREY: Rgba = [90, 90, 90, 255];

/// Builds 8x8 RGBA pixels (upper-left origin) from a per-pixel color function.
pub fn image_from(f: impl Fn(usize, usize) -> Rgba) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(8 * 8 * 4);
    for row in 0..8 {
        for col in 0..8 {
            pixels.extend_from_slice(&f(col, row));
        }
    }
    pixels
}

/// A flame: transparent corners, orange body, yellow core.
pub fn flame() -> Vec<u8> {
    image_from(|col, row| {
        let edge = col == 0 || col == 7 || row == 0 || row == 7;
        let core = (3..=4).contains(&col) && (3..=5).contains(&row);
        match (edge, core) {
            (true, _) => CLEAR,
            (false, true) => YELLOW,
            (false, false) => ORANGE,
        }
    })
}

/// A torch using all four palette slots.
pub fn torch() -> Vec<u8> {
    image_from(|col, row| match (col, row) {
        (3..=4, 0..=1) => YELLOW,
        (3..=4, 2..=7) => BROWN,
        (_, 7) => GREY,
        _ => CLEAR,
    })
}

pub fn background() -> Vec<u8> {
    image_from(|col, _| if col % 2 == 0 { GREY } else { BROWN })
}

/// Encodes object records as room pixels followed by a transparent sentinel.
pub fn room_image(records: &[ObjectRecord]) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(8 * 8 * 4);
    for record in records {
        pixels.extend_from_slice(&[record.kind, record.x, record.y, 255]);
    }
    pixels.resize(8 * 8 * 4, 0);
    pixels
}
