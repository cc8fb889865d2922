use log::{debug, error, info};
use serde::Serialize;
use thiserror::Error;

use super::format::{room_tag, tag_name, AssetPack};
use crate::constants::{MAX_ROOMS, PALETTE_TAG, TILE_TAG};

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Failed to serialize record")]
    SerializationFailed(#[from] bincode::Error),
    #[error("Chunk {0} payload of {1} bytes does not fit a 32-bit length")]
    ChunkTooLarge(String, usize),
    #[error("Too many rooms: {0} given, at most {1} supported")]
    TooManyRooms(usize, usize),
}

fn write_chunk<T: Serialize>(
    tag: [u8; 4],
    records: &[T],
    out: &mut Vec<u8>,
) -> Result<(), EncodingError> {
    let mut payload = Vec::new();
    for record in records {
        payload.extend_from_slice(&bincode::serialize(record)?);
    }

    let length = u32::try_from(payload.len()).map_err(|_| {
        error!("Chunk {} is too large: {} bytes", tag_name(&tag), payload.len());
        EncodingError::ChunkTooLarge(tag_name(&tag), payload.len())
    })?;

    out.extend_from_slice(&tag); // Tag
    out.extend_from_slice(&length.to_le_bytes()); // Payload length
    out.extend_from_slice(&payload);
    debug!(
        "Chunk {} written: {} records, {} bytes",
        tag_name(&tag),
        records.len(),
        length
    );
    Ok(())
}

pub fn encode(pack: &AssetPack) -> Result<Vec<u8>, EncodingError> {
    info!("Starting encoding");

    if pack.rooms.len() > MAX_ROOMS {
        error!(
            "Room count {} exceeds the maximum of {}",
            pack.rooms.len(),
            MAX_ROOMS
        );
        return Err(EncodingError::TooManyRooms(pack.rooms.len(), MAX_ROOMS));
    }

    let mut encoded_data: Vec<u8> = Vec::new();

    // Step 1: Palette table
    write_chunk(PALETTE_TAG, &pack.palettes, &mut encoded_data)?;

    // Step 2: Tile table
    write_chunk(TILE_TAG, &pack.tiles, &mut encoded_data)?;

    // Step 3: One object list per room
    for (index, room) in pack.rooms.iter().enumerate() {
        write_chunk(room_tag(index), room, &mut encoded_data)?;
    }

    info!(
        "Encoding process completed successfully: {} bytes",
        encoded_data.len()
    );
    Ok(encoded_data)
}
