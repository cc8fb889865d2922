use crate::asset::format::ObjectRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Torch,
    Key,
    Bomb,
    Other(u8),
}

impl ObjectKind {
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            0 => ObjectKind::Torch,
            1 => ObjectKind::Key,
            2 => ObjectKind::Bomb,
            other => ObjectKind::Other(other),
        }
    }

    pub fn tag(&self) -> u8 {
        match self {
            ObjectKind::Torch => 0,
            ObjectKind::Key => 1,
            ObjectKind::Bomb => 2,
            ObjectKind::Other(tag) => *tag,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Object {
    pub kind: ObjectKind,
    pub reached: bool, // Has been reached by the player
    pub x: u8,
    pub y: u8,
}

impl From<ObjectRecord> for Object {
    fn from(record: ObjectRecord) -> Self {
        Self {
            kind: ObjectKind::from_tag(record.kind),
            reached: false,
            x: record.x,
            y: record.y,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Room {
    pub objects: Vec<Object>,
}

impl Room {
    pub fn from_records(records: &[ObjectRecord]) -> Self {
        Self {
            objects: records.iter().copied().map(Object::from).collect(),
        }
    }

    /// A found key opens the room, and so does lighting every torch in it.
    pub fn is_complete(&self) -> bool {
        let key_found = self
            .objects
            .iter()
            .any(|o| o.kind == ObjectKind::Key && o.reached);

        let torches_lit = self
            .objects
            .iter()
            .filter(|o| o.kind == ObjectKind::Torch)
            .all(|o| o.reached);

        key_found || torches_lit
    }

    pub fn reset_after_explosion(&mut self) {
        for object in self.objects.iter_mut().filter(|o| o.kind != ObjectKind::Bomb) {
            object.reached = false;
        }
    }
}

/// Sprite sheet order of the baked pack. Sprite `i` lives in tile `i` and palette `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteKind {
    Flame,
    UnlitTorch,
    LitTorch,
    Chest,
    Key,
    Explosion,
    Door,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 7] = [
        SpriteKind::Flame,
        SpriteKind::UnlitTorch,
        SpriteKind::LitTorch,
        SpriteKind::Chest,
        SpriteKind::Key,
        SpriteKind::Explosion,
        SpriteKind::Door,
    ];

    pub fn tile(&self) -> u8 {
        *self as u8
    }

    pub fn palette(&self) -> u8 {
        *self as u8
    }

    /// Sprite shown for an object in its current state.
    pub fn for_object(object: &Object) -> Self {
        match (object.kind, object.reached) {
            (ObjectKind::Torch, false) => SpriteKind::UnlitTorch,
            (ObjectKind::Torch, true) => SpriteKind::LitTorch,
            (ObjectKind::Key, true) => SpriteKind::Key,
            (ObjectKind::Bomb, true) => SpriteKind::Explosion,
            (ObjectKind::Key, false) | (ObjectKind::Bomb, false) | (ObjectKind::Other(_), _) => {
                SpriteKind::Chest
            }
        }
    }
}
