use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::constants::{PALETTE_SIZE, TILE_BYTES, TILE_SIZE};
use crate::ppu::{Color, Palette, Tile, TRANSPARENT};

#[derive(Error, Debug)]
pub enum TileBakeError {
    #[error("Invalid pixel data length: expected {} bytes, got {0}", TILE_BYTES)]
    InvalidPixelDataLength(usize),
    #[error("Palette overflow: maximum 4 colors supported, attempted to add color #{0}")]
    PaletteOverflow(usize),
    #[error("Background image needs at least 2 pixels, got {0} bytes")]
    BackgroundTooSmall(usize),
}

pub struct BakedTile {
    pub palette: Palette, // Colors in order of first appearance
    pub tile: Tile,       // 2-bit index per pixel
    pub colors_found: usize,
}

/// Quantizes an 8x8 RGBA image into a 4-color palette and a two-plane tile.
///
/// # Parameters
/// - `pixels`: 8x8 RGBA pixels, upper-left origin, row-major.
///
/// # Returns
/// A Result containing a `BakedTile` whose palette slots are filled in the
/// order colors are first met, scanning tile rows bottom-up and columns
/// left to right. Unused slots stay transparent.
///
/// # Errors
/// - Returns `TileBakeError::InvalidPixelDataLength` if input is not exactly 8x8 RGBA
/// - Returns `TileBakeError::PaletteOverflow` if more than 4 unique colors are found
pub fn bake_tile(pixels: &[u8]) -> Result<BakedTile, TileBakeError> {
    if pixels.len() != TILE_BYTES {
        return Err(TileBakeError::InvalidPixelDataLength(pixels.len()));
    }

    let mut slots: HashMap<Color, u8> = HashMap::new();
    let mut colors = [TRANSPARENT; PALETTE_SIZE];
    let mut tile = Tile::default();

    for y in 0..TILE_SIZE {
        // Tile rows count up from the bottom of the image
        let row = TILE_SIZE - 1 - y;
        for x in 0..TILE_SIZE {
            let offset = (row * TILE_SIZE + x) * 4;
            let color = [
                pixels[offset],
                pixels[offset + 1],
                pixels[offset + 2],
                pixels[offset + 3],
            ];

            let index = match slots.get(&color) {
                Some(&index) => index,
                None => {
                    if slots.len() >= PALETTE_SIZE {
                        return Err(TileBakeError::PaletteOverflow(slots.len() + 1));
                    }
                    let index = slots.len() as u8;
                    colors[index as usize] = color;
                    slots.insert(color, index);
                    index
                }
            };
            tile.set_index(x, y, index);
        }
    }

    debug!("Baked palette: {:?}", colors);
    for y in 0..TILE_SIZE {
        debug!("Row {}: {:08b}, {:08b}", y, tile.bit1[y], tile.bit0[y]);
    }

    Ok(BakedTile {
        palette: Palette(colors),
        tile,
        colors_found: slots.len(),
    })
}

/// Expands a tile back into 8x8 RGBA pixels, upper-left origin.
pub fn decode_tile(tile: &Tile, palette: &Palette) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(TILE_BYTES);
    for row in 0..TILE_SIZE {
        let y = TILE_SIZE - 1 - row;
        for x in 0..TILE_SIZE {
            pixels.extend_from_slice(&palette.color(tile.index_at(x, y)));
        }
    }
    pixels
}

/// Background palette: transparent, the first two pixels of the image, transparent.
pub fn background_palette(pixels: &[u8]) -> Result<Palette, TileBakeError> {
    if pixels.len() < 8 {
        return Err(TileBakeError::BackgroundTooSmall(pixels.len()));
    }
    let first = [pixels[0], pixels[1], pixels[2], pixels[3]];
    let second = [pixels[4], pixels[5], pixels[6], pixels[7]];
    Ok(Palette([TRANSPARENT, first, second, TRANSPARENT]))
}
