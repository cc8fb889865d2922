pub mod room;
pub mod tile;

use log::{debug, info};
use room::RoomExtractError;
use thiserror::Error;
use tile::TileBakeError;

pub use room::extract_room_objects;
pub use tile::{background_palette, bake_tile, decode_tile, BakedTile};

use crate::asset::format::AssetPack;
use crate::constants::{BACKGROUND_PALETTE, PALETTE_COUNT, TILE_COUNT};
use crate::ppu::{Palette, Tile};

#[derive(Error, Debug)]
pub enum BakeError {
    #[error("Tile baking failed")]
    TileBakeFailed(#[from] TileBakeError),
    #[error("Room extraction failed")]
    RoomExtractionFailed(#[from] RoomExtractError),
    #[error("Too many sprites: {0} given, {1} palette slots available")]
    TooManySprites(usize, usize),
}

/// Raw RGBA inputs for one pack, already decoded from their image files.
pub struct BakeSources<'a> {
    pub background: &'a [u8],
    pub sprites: Vec<&'a [u8]>,
    pub rooms: Vec<&'a [u8]>,
}

/// Bakes every source into a complete pack.
///
/// Sprite `i` gets palette `i` and tile `i`; the background palette takes the
/// last palette slot, so at most 7 sprites fit.
pub fn bake_pack(sources: &BakeSources) -> Result<AssetPack, BakeError> {
    info!("Starting bake");

    let sprite_slots = BACKGROUND_PALETTE as usize;
    if sources.sprites.len() > sprite_slots {
        return Err(BakeError::TooManySprites(sources.sprites.len(), sprite_slots));
    }

    let mut palettes = vec![Palette::default(); PALETTE_COUNT];
    let mut tiles = vec![Tile::default(); TILE_COUNT];

    palettes[BACKGROUND_PALETTE as usize] = background_palette(sources.background)?;
    debug!("Background palette: {:?}", palettes[BACKGROUND_PALETTE as usize]);

    for (i, pixels) in sources.sprites.iter().enumerate() {
        let baked = bake_tile(pixels)?;
        debug!("Sprite {} uses {} colors", i, baked.colors_found);
        palettes[i] = baked.palette;
        tiles[i] = baked.tile;
    }

    let rooms = sources
        .rooms
        .iter()
        .map(|pixels| extract_room_objects(pixels))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "Bake completed: {} sprites, {} rooms",
        sources.sprites.len(),
        rooms.len()
    );

    Ok(AssetPack {
        palettes,
        tiles,
        rooms,
    })
}
