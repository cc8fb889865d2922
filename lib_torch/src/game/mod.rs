pub mod collision;
pub mod input;
pub mod object;
pub mod play;
pub mod state;

use std::io;

use thiserror::Error;

use crate::asset::DecodeError;
use crate::ppu::TableError;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Asset pack contains no rooms")]
    NoRooms,
    #[error("Failed to read asset pack: {0}")]
    IoError(#[from] io::Error),
    #[error("Asset pack decode failed")]
    DecodeFailed(#[from] DecodeError),
    #[error("PPU tables rejected")]
    TablesRejected(#[from] TableError),
}
