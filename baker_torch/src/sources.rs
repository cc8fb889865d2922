use lib_torch::game::object::SpriteKind;

// Paths are relative to the directory holding the executable.
pub const BACKGROUND_PATH: &str = "../images/background.png";

pub const SPRITE_PATHS: [(SpriteKind, &str); 7] = [
    (SpriteKind::Flame, "../images/flame.png"),
    (SpriteKind::UnlitTorch, "../images/unlit_torch.png"),
    (SpriteKind::LitTorch, "../images/lit_torch.png"),
    (SpriteKind::Chest, "../images/chest.png"),
    (SpriteKind::Key, "../images/key.png"),
    (SpriteKind::Explosion, "../images/explosion.png"),
    (SpriteKind::Door, "../images/door.png"),
];

pub const ROOM_PATHS: [&str; 3] = [
    "../images/room0.png",
    "../images/room1.png",
    "../images/room2.png",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_paths_follow_sheet_order() {
        let kinds: Vec<SpriteKind> = SPRITE_PATHS.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds, SpriteKind::ALL.to_vec());
    }
}
