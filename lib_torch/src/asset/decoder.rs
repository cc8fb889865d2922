use log::{debug, error, info};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::format::{room_tag, tag_name, AssetPack};
use crate::constants::{PALETTE_COUNT, PALETTE_TAG, TILE_COUNT, TILE_TAG};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Unexpected end of data while reading chunk {0} header")]
    UnexpectedEofHeader(String),
    #[error("Chunk {tag} declares {declared} bytes but only {available} remain")]
    UnexpectedEofPayload {
        tag: String,
        declared: usize,
        available: usize,
    },
    #[error("Expected chunk {expected}, found {found}")]
    TagMismatch { expected: String, found: String },
    #[error("Malformed record in chunk {0}")]
    MalformedRecord(String, #[source] bincode::Error),
    #[error("Palette table has {0} entries, expected {}", PALETTE_COUNT)]
    PaletteTableSize(usize),
    #[error("Tile table has {0} entries, expected {}", TILE_COUNT)]
    TileTableSize(usize),
}

struct ChunkReader<'a> {
    data: &'a [u8],
    cursor: usize,
}

impl<'a> ChunkReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, cursor: 0 }
    }

    fn is_empty(&self) -> bool {
        self.cursor >= self.data.len()
    }

    fn read_chunk<T: DeserializeOwned>(&mut self, tag: [u8; 4]) -> Result<Vec<T>, DecodeError> {
        let expected = tag_name(&tag);
        let remaining = &self.data[self.cursor..];

        if remaining.len() < AssetPack::HEADER_SIZE {
            error!("Unexpected end of data while reading chunk {} header", expected);
            return Err(DecodeError::UnexpectedEofHeader(expected));
        }

        let found = &remaining[..AssetPack::TAG_SIZE];
        if found != tag {
            error!("Expected chunk {}, found {}", expected, tag_name(found));
            return Err(DecodeError::TagMismatch {
                expected,
                found: tag_name(found),
            });
        }

        let mut length_bytes = [0u8; AssetPack::LENGTH_SIZE];
        length_bytes.copy_from_slice(&remaining[AssetPack::TAG_SIZE..AssetPack::HEADER_SIZE]);
        let declared = u32::from_le_bytes(length_bytes) as usize;

        let available = remaining.len() - AssetPack::HEADER_SIZE;
        if declared > available {
            error!(
                "Chunk {} declares {} bytes but only {} remain",
                expected, declared, available
            );
            return Err(DecodeError::UnexpectedEofPayload {
                tag: expected,
                declared,
                available,
            });
        }

        let mut payload = &remaining[AssetPack::HEADER_SIZE..AssetPack::HEADER_SIZE + declared];
        let mut records = Vec::new();
        while !payload.is_empty() {
            let record = bincode::deserialize_from(&mut payload)
                .map_err(|e| DecodeError::MalformedRecord(expected.clone(), e))?;
            records.push(record);
        }

        self.cursor += AssetPack::HEADER_SIZE + declared;
        debug!(
            "Chunk {} read: {} records, {} bytes",
            expected,
            records.len(),
            declared
        );
        Ok(records)
    }
}

pub fn decode(encoded_data: &[u8]) -> Result<AssetPack, DecodeError> {
    info!("Starting decoding of {} bytes", encoded_data.len());
    let mut reader = ChunkReader::new(encoded_data);

    let palettes = reader.read_chunk(PALETTE_TAG)?;
    if palettes.len() != PALETTE_COUNT {
        error!("Palette table has {} entries", palettes.len());
        return Err(DecodeError::PaletteTableSize(palettes.len()));
    }

    let tiles = reader.read_chunk(TILE_TAG)?;
    if tiles.len() != TILE_COUNT {
        error!("Tile table has {} entries", tiles.len());
        return Err(DecodeError::TileTableSize(tiles.len()));
    }

    let mut rooms = Vec::new();
    while !reader.is_empty() {
        let room = reader.read_chunk(room_tag(rooms.len()))?;
        rooms.push(room);
    }

    info!("Decoding completed: {} rooms", rooms.len());
    Ok(AssetPack {
        palettes,
        tiles,
        rooms,
    })
}
