use serde::{Deserialize, Serialize};

use crate::constants::ROOM_TAG_PREFIX;
use crate::ppu::{Palette, Tile};

/// One object of a room as baked: type tag and position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub kind: u8,
    pub x: u8,
    pub y: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPack {
    pub palettes: Vec<Palette>,
    pub tiles: Vec<Tile>,
    pub rooms: Vec<Vec<ObjectRecord>>,
}

impl AssetPack {
    pub const TAG_SIZE: usize = 4;
    pub const LENGTH_SIZE: usize = std::mem::size_of::<u32>();
    pub const HEADER_SIZE: usize = Self::TAG_SIZE + Self::LENGTH_SIZE;
}

/// Chunk tag of room `index`: `rm00`, `rm01`, ...
pub fn room_tag(index: usize) -> [u8; 4] {
    let tens = b'0' + (index / 10 % 10) as u8;
    let ones = b'0' + (index % 10) as u8;
    [ROOM_TAG_PREFIX[0], ROOM_TAG_PREFIX[1], tens, ones]
}

pub fn tag_name(tag: &[u8]) -> String {
    String::from_utf8_lossy(tag).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_tags() {
        assert_eq!(&room_tag(0), b"rm00");
        assert_eq!(&room_tag(7), b"rm07");
        assert_eq!(&room_tag(42), b"rm42");
    }
}
