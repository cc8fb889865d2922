pub const FORMAT_NAME: &str = "Torch asset pack";
pub const FILE_EXT: &str = "bin";

/// Packed asset file, relative to the executable's directory.
pub const PACK_FILE: &str = "../tiles.bin";

// PPU geometry
pub const SCREEN_WIDTH: u32 = 256;
pub const SCREEN_HEIGHT: u32 = 240;
pub const BACKGROUND_WIDTH: usize = 64;
pub const BACKGROUND_HEIGHT: usize = 60;
pub const TILE_SIZE: usize = 8;
pub const TILE_PIXELS: usize = TILE_SIZE * TILE_SIZE;
pub const TILE_BYTES: usize = TILE_PIXELS * 4;

// PPU table sizes
pub const PALETTE_COUNT: usize = 8;
pub const PALETTE_SIZE: usize = 4;
pub const TILE_COUNT: usize = 16 * 16;
pub const SPRITE_COUNT: usize = 64;

// Chunk tags
pub const PALETTE_TAG: [u8; 4] = *b"pal0";
pub const TILE_TAG: [u8; 4] = *b"til1";
pub const ROOM_TAG_PREFIX: [u8; 2] = *b"rm";
pub const MAX_ROOMS: usize = 100;

// Reserved table slots
pub const BACKGROUND_PALETTE: u8 = 7;
pub const SOLID_TILE: u8 = 254;
pub const CLEAR_TILE: u8 = 255;

// Gameplay
pub const PLAYER_SPEED: f32 = 30.0;
pub const LIGHT_RADIUS: f32 = 5.0;
pub const DOOR_POSITION: (u8, u8) = (124, 224);
pub const EXPLOSION_COLOR: [u8; 4] = [0x40, 0x08, 0x00, 0xff];
