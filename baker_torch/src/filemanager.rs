use image::{ImageError, RgbaImage};
use lib_torch::asset::EncodingError;
use lib_torch::constants::{FILE_EXT, FORMAT_NAME, TILE_SIZE};
use lib_torch::{encode, AssetPack};
use log::{error, info, warn};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageHandlingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Image processing error: {0}")]
    ImageError(#[from] ImageError),

    #[error("{path} is {width}x{height}, expected 8x8")]
    WrongSize {
        path: String,
        width: u32,
        height: u32,
    },

    #[error("Asset pack encoding failed")]
    EncodeFailed(#[from] EncodingError),
}

/// Opens a PNG and checks that it is a single 8x8 tile.
pub fn open_tile_image(path: &Path) -> Result<RgbaImage, ImageHandlingError> {
    info!("Loading {}", path.display());
    let image = image::open(path)?.to_rgba8();

    let (width, height) = image.dimensions();
    if width != TILE_SIZE as u32 || height != TILE_SIZE as u32 {
        error!("{} is {}x{}", path.display(), width, height);
        return Err(ImageHandlingError::WrongSize {
            path: path.display().to_string(),
            width,
            height,
        });
    }

    Ok(image)
}

pub fn save_pack(path: &Path, pack: &AssetPack) -> Result<(), ImageHandlingError> {
    if path.extension().and_then(|ext| ext.to_str()) != Some(FILE_EXT) {
        warn!("{} does not end in .{}", path.display(), FILE_EXT);
    }
    info!("Writing {} to {}", FORMAT_NAME, path.display());
    let encoded_data = encode(pack)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(&encoded_data)?;
    println!("Pack saved successfully to {}", path.display());

    Ok(())
}
