mod common;

use common::{background, flame, image_from, room_image, torch, CLEAR, GREY, ORANGE, YELLOW};
use lib_torch::asset::format::ObjectRecord;
use lib_torch::bake::{bake_pack, bake_tile, decode_tile, extract_room_objects, BakeSources};
use lib_torch::constants::BACKGROUND_PALETTE;

#[test]
fn test_bake_decode_flame() {
    let pixels = flame();
    let baked = bake_tile(&pixels).unwrap();
    assert_eq!(baked.colors_found, 3);

    let decoded = decode_tile(&baked.tile, &baked.palette);
    assert_eq!(decoded, pixels);
}

#[test]
fn test_bake_decode_torch() {
    let pixels = torch();
    let baked = bake_tile(&pixels).unwrap();
    assert_eq!(baked.colors_found, 4);
    assert_eq!(decode_tile(&baked.tile, &baked.palette), pixels);
}

#[test]
fn test_bake_decode_every_two_color_pattern_row() {
    // Each row is a distinct bit pattern, exercising every column of every plane
    let patterns = [0x00u8, 0xff, 0x0f, 0xf0, 0x55, 0xaa, 0x81, 0x3c];
    let pixels = image_from(|col, row| {
        if patterns[row] >> col & 1 == 1 {
            YELLOW
        } else {
            GREY
        }
    });
    let baked = bake_tile(&pixels).unwrap();
    assert_eq!(decode_tile(&baked.tile, &baked.palette), pixels);
}

#[test]
fn test_transparent_corner_takes_slot_zero() {
    // The scan starts at the bottom-left pixel, which is transparent in the flame
    let baked = bake_tile(&flame()).unwrap();
    assert_eq!(baked.palette.0[0], CLEAR);
    assert_eq!(baked.palette.0[1], ORANGE);
    assert_eq!(baked.palette.0[2], YELLOW);
}

#[test]
fn test_room_objects_follow_sentinel_order() {
    let records = vec![
        ObjectRecord { kind: 0, x: 32, y: 40 },
        ObjectRecord { kind: 0, x: 200, y: 40 },
        ObjectRecord { kind: 2, x: 120, y: 100 },
        ObjectRecord { kind: 1, x: 64, y: 180 },
    ];
    let objects = extract_room_objects(&room_image(&records)).unwrap();
    assert_eq!(objects, records);
}

#[test]
fn test_bake_pack_from_sources() {
    let background = background();
    let flame = flame();
    let torch = torch();
    let room = room_image(&[ObjectRecord { kind: 1, x: 10, y: 10 }]);

    let pack = bake_pack(&BakeSources {
        background: &background,
        sprites: vec![flame.as_slice(), torch.as_slice()],
        rooms: vec![room.as_slice()],
    })
    .unwrap();

    let torch_baked = bake_tile(&torch).unwrap();
    assert_eq!(pack.palettes[1], torch_baked.palette);
    assert_eq!(pack.tiles[1], torch_baked.tile);
    assert_eq!(pack.palettes[BACKGROUND_PALETTE as usize].0[1], GREY);
    assert_eq!(pack.rooms, vec![vec![ObjectRecord { kind: 1, x: 10, y: 10 }]]);
}
