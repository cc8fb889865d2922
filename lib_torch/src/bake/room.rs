use log::debug;
use thiserror::Error;

use crate::asset::format::ObjectRecord;

#[derive(Error, Debug)]
pub enum RoomExtractError {
    #[error("Invalid pixel data length: expected multiple of 4 bytes, got {0}")]
    InvalidPixelDataLength(usize),
}

/// Reads a room image as a list of object records.
///
/// Every opaque pixel, in upper-left row-major order, encodes one object:
/// red is the type tag, green the x position and blue the y position.
/// The first fully transparent pixel ends the list.
pub fn extract_room_objects(pixels: &[u8]) -> Result<Vec<ObjectRecord>, RoomExtractError> {
    if pixels.len() % 4 != 0 {
        return Err(RoomExtractError::InvalidPixelDataLength(pixels.len()));
    }

    let objects: Vec<ObjectRecord> = pixels
        .chunks_exact(4)
        .take_while(|pixel| pixel[3] != 0)
        .map(|pixel| ObjectRecord {
            kind: pixel[0],
            x: pixel[1],
            y: pixel[2],
        })
        .collect();

    debug!("Extracted {} room objects: {:?}", objects.len(), objects);
    Ok(objects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_stops_at_transparent_pixel() {
        let pixels = vec![
            0, 10, 20, 255, // torch
            1, 30, 40, 255, // key
            0, 0, 0, 0, // end
            2, 50, 60, 255, // never read
        ];
        let objects = extract_room_objects(&pixels).unwrap();
        assert_eq!(
            objects,
            vec![
                ObjectRecord { kind: 0, x: 10, y: 20 },
                ObjectRecord { kind: 1, x: 30, y: 40 },
            ]
        );
    }

    #[test]
    fn test_extract_without_sentinel_reads_whole_image() {
        let pixels = [2, 7, 9, 128].repeat(64);
        let objects = extract_room_objects(&pixels).unwrap();
        assert_eq!(objects.len(), 64);
        assert!(objects.iter().all(|o| *o == ObjectRecord { kind: 2, x: 7, y: 9 }));
    }

    #[test]
    fn test_extract_semi_transparent_pixel_is_an_object() {
        let pixels = vec![3, 1, 2, 1, 0, 0, 0, 0];
        let objects = extract_room_objects(&pixels).unwrap();
        assert_eq!(objects, vec![ObjectRecord { kind: 3, x: 1, y: 2 }]);
    }

    #[test]
    fn test_extract_empty_room() {
        let pixels = [0, 0, 0, 0].repeat(64);
        assert!(extract_room_objects(&pixels).unwrap().is_empty());
    }

    #[test]
    fn test_extract_invalid_length() {
        let result = extract_room_objects(&[1, 2, 3, 4, 5]);
        assert!(matches!(
            result,
            Err(RoomExtractError::InvalidPixelDataLength(5))
        ));
    }
}
