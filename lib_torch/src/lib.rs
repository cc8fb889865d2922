pub mod asset;
pub mod bake;
pub mod constants;
pub mod game;
pub mod ppu;

use log::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub use crate::asset::format::{AssetPack, ObjectRecord};
pub use crate::asset::{decode, encode};
pub use crate::game::play::PlayMode;
pub use crate::ppu::{Palette, Ppu, Sprite, Tile};

pub fn init_logging() -> io::Result<()> {
    let target = Box::new(File::create("log.txt")?);

    env_logger::Builder::new()
        .target(env_logger::Target::Pipe(target))
        .filter(Some("lib_torch"), LevelFilter::Debug)
        .filter(Some("bake_tiles"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
    Ok(())
}

/// Resolves `relative` against the directory holding the running executable.
pub fn data_path(relative: impl AsRef<Path>) -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(dir.join(relative))
}
