use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    BACKGROUND_HEIGHT, BACKGROUND_WIDTH, PALETTE_COUNT, PALETTE_SIZE, SCREEN_HEIGHT,
    SPRITE_COUNT, TILE_COUNT, TILE_SIZE,
};

/// RGBA color entry.
pub type Color = [u8; 4];

pub const TRANSPARENT: Color = [0x00, 0x00, 0x00, 0x00];

#[derive(Error, Debug)]
pub enum TableError {
    #[error("palette table has {0} entries, expected {}", PALETTE_COUNT)]
    PaletteTableSize(usize),
    #[error("tile table has {0} entries, expected {}", TILE_COUNT)]
    TileTableSize(usize),
}

/// Four colors addressed by a 2-bit tile index. Index 0 is conventionally transparent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette(pub [Color; PALETTE_SIZE]);

impl Palette {
    pub fn color(&self, index: u8) -> Color {
        self.0[(index & 0b11) as usize]
    }
}

/// 8x8 tile stored as two bit planes.
///
/// Row 0 is the bottom row of the tile and bit `x` of a row is column `x`
/// counted from the left, so the color index of a pixel is
/// `bit1[y] >> x & 1` in the high bit and `bit0[y] >> x & 1` in the low bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub bit0: [u8; TILE_SIZE],
    pub bit1: [u8; TILE_SIZE],
}

impl Tile {
    /// A tile with every pixel set to `index`.
    pub const fn filled(index: u8) -> Self {
        let low = if index & 0b01 != 0 { 0xff } else { 0x00 };
        let high = if index & 0b10 != 0 { 0xff } else { 0x00 };
        Self {
            bit0: [low; TILE_SIZE],
            bit1: [high; TILE_SIZE],
        }
    }

    pub fn index_at(&self, x: usize, y: usize) -> u8 {
        let low = (self.bit0[y] >> x) & 0b1;
        let high = (self.bit1[y] >> x) & 0b1;
        (high << 1) | low
    }

    pub fn set_index(&mut self, x: usize, y: usize, index: u8) {
        let mask = 1u8 << x;
        self.bit0[y] &= !mask;
        self.bit1[y] &= !mask;
        self.bit0[y] |= (index & 0b1) << x;
        self.bit1[y] |= ((index >> 1) & 0b1) << x;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sprite {
    pub x: u8,
    pub y: u8,
    pub index: u8,
    pub attributes: u8,
}

impl Sprite {
    /// Draw the sprite behind the background.
    pub const BEHIND: u8 = 0x80;

    /// Parked below the visible screen.
    pub const HIDDEN: Sprite = Sprite {
        x: 0,
        y: SCREEN_HEIGHT as u8,
        index: 0,
        attributes: 0,
    };

    pub fn palette(&self) -> u8 {
        self.attributes & 0b111
    }
}

/// The table state a PPU renderer draws from.
#[derive(Clone, Debug)]
pub struct Ppu {
    pub background_color: Color,
    pub palette_table: [Palette; PALETTE_COUNT],
    pub tile_table: [Tile; TILE_COUNT],
    /// `BACKGROUND_WIDTH * BACKGROUND_HEIGHT` entries of `tile | palette << 8`.
    pub background: Vec<u16>,
    pub background_position: (i32, i32),
    pub sprites: [Sprite; SPRITE_COUNT],
}

impl Ppu {
    pub fn new() -> Self {
        Self {
            background_color: TRANSPARENT,
            palette_table: [Palette::default(); PALETTE_COUNT],
            tile_table: [Tile::default(); TILE_COUNT],
            background: vec![0; BACKGROUND_WIDTH * BACKGROUND_HEIGHT],
            background_position: (0, 0),
            sprites: [Sprite::HIDDEN; SPRITE_COUNT],
        }
    }

    pub fn load_tables(&mut self, palettes: &[Palette], tiles: &[Tile]) -> Result<(), TableError> {
        if palettes.len() != PALETTE_COUNT {
            return Err(TableError::PaletteTableSize(palettes.len()));
        }
        if tiles.len() != TILE_COUNT {
            return Err(TableError::TileTableSize(tiles.len()));
        }
        self.palette_table.copy_from_slice(palettes);
        self.tile_table.copy_from_slice(tiles);
        Ok(())
    }

    pub fn background_entry(tile: u8, palette: u8) -> u16 {
        tile as u16 | ((palette as u16 & 0b111) << 8)
    }
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}
