use std::io;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use lib_torch::bake::{bake_pack, BakeError, BakeSources};
use lib_torch::constants::PACK_FILE;
use log::{debug, info};
use thiserror::Error;

use crate::filemanager::{open_tile_image, save_pack, ImageHandlingError};
use crate::sources::{BACKGROUND_PATH, ROOM_PATHS, SPRITE_PATHS};

#[derive(Error, Debug)]
pub enum BakeToolError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Image handling failed: {0}")]
    ImageHandlingFailed(#[from] ImageHandlingError),

    #[error("Baking failed: {0}")]
    BakeFailed(#[from] BakeError),
}

/// Bakes every source image found relative to `base` and writes the pack.
///
/// Returns the path of the written pack.
pub fn run(base: &Path) -> Result<PathBuf, BakeToolError> {
    let background = open_tile_image(&base.join(BACKGROUND_PATH))?;

    let mut sprites: Vec<RgbaImage> = Vec::with_capacity(SPRITE_PATHS.len());
    for (kind, path) in SPRITE_PATHS {
        debug!("Sprite {:?} from {}", kind, path);
        sprites.push(open_tile_image(&base.join(path))?);
    }

    let rooms = ROOM_PATHS
        .iter()
        .map(|path| open_tile_image(&base.join(path)))
        .collect::<Result<Vec<_>, _>>()?;

    let pack = bake_pack(&BakeSources {
        background: background.as_raw(),
        sprites: sprites.iter().map(|image| image.as_raw().as_slice()).collect(),
        rooms: rooms.iter().map(|image| image.as_raw().as_slice()).collect(),
    })?;

    let output = base.join(PACK_FILE);
    save_pack(&output, &pack)?;
    info!("Wrote {} rooms to {}", pack.rooms.len(), output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use lib_torch::decode;
    use std::fs;

    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
    const GOLD: Rgba<u8> = Rgba([230, 190, 40, 255]);
    const STONE: Rgba<u8> = Rgba([80, 80, 90, 255]);

    fn write_images(root: &Path) {
        let images = root.join("images");
        fs::create_dir_all(&images).unwrap();

        RgbaImage::from_fn(8, 8, |x, _| if x % 2 == 0 { STONE } else { GOLD })
            .save(images.join("background.png"))
            .unwrap();

        for (_, path) in SPRITE_PATHS {
            let name = Path::new(path).file_name().unwrap();
            RgbaImage::from_fn(8, 8, |x, y| if x == y { GOLD } else { CLEAR })
                .save(images.join(name))
                .unwrap();
        }

        for (index, path) in ROOM_PATHS.iter().enumerate() {
            let name = Path::new(path).file_name().unwrap();
            RgbaImage::from_fn(8, 8, |x, y| {
                if y == 0 && (x as usize) <= index {
                    Rgba([x as u8 % 3, 16 * x as u8, 32, 255])
                } else {
                    CLEAR
                }
            })
            .save(images.join(name))
            .unwrap();
        }
    }

    #[test]
    fn test_run_bakes_all_sources() {
        let root = std::env::temp_dir().join(format!("torch-baker-run-{}", std::process::id()));
        let base = root.join("bin");
        fs::create_dir_all(&base).unwrap();
        write_images(&root);

        let output = run(&base).unwrap();
        let pack = decode(&fs::read(&output).unwrap()).unwrap();

        assert_eq!(pack.rooms.len(), ROOM_PATHS.len());
        assert_eq!(pack.rooms[0].len(), 1);
        assert_eq!(pack.rooms[2].len(), 3);
        assert_eq!(pack.rooms[2][1].x, 16);
        assert_eq!(pack.rooms[2][1].kind, 1);
        assert_eq!(pack.palettes[7].0[1], STONE.0);
        // The bottom-left pixel is scanned first
        assert_eq!(pack.palettes[0].0[0], CLEAR.0);
        assert_eq!(pack.palettes[0].0[1], GOLD.0);

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_run_missing_images() {
        let base = std::env::temp_dir().join(format!("torch-baker-empty-{}", std::process::id()));
        let result = run(&base);
        assert!(matches!(
            result,
            Err(BakeToolError::ImageHandlingFailed(_))
        ));
    }
}
