use crate::constants::TILE_SIZE;

/// Axis-aligned box covering one 8x8 sprite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: (f32, f32),
    pub max: (f32, f32),
}

impl Aabb {
    pub fn tile_at(x: f32, y: f32) -> Self {
        let size = TILE_SIZE as f32;
        Self {
            min: (x, y),
            max: (x + size, y + size),
        }
    }
}

/// Whether two boxes are in contact.
///
/// Boxes only touching along an edge never count. When they do overlap, the
/// contact counts only if the overlap is at least as wide as it is tall.
pub fn contact(a: &Aabb, b: &Aabb) -> bool {
    let min_x = a.min.0.max(b.min.0);
    let min_y = a.min.1.max(b.min.1);
    let max_x = a.max.0.min(b.max.0);
    let max_y = a.max.1.min(b.max.1);

    if min_x >= max_x || min_y >= max_y {
        return false;
    }

    max_x - min_x >= max_y - min_y
}
