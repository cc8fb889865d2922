use log::{debug, info};

use super::collision::{contact, Aabb};
use super::input::Controls;
use super::object::{ObjectKind, Room};
use super::GameError;
use crate::constants::{DOOR_POSITION, PLAYER_SPEED, SCREEN_HEIGHT, SCREEN_WIDTH, TILE_SIZE};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub const MAX: Position = Position {
        x: (SCREEN_WIDTH as usize - TILE_SIZE) as f32,
        y: (SCREEN_HEIGHT as usize - TILE_SIZE) as f32,
    };

    fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(Self::ORIGIN.x, Self::MAX.x),
            y: self.y.clamp(Self::ORIGIN.y, Self::MAX.y),
        }
    }
}

/// Room-level outcome of a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomEvent {
    Exploded,
    Advanced(usize),
    Escaped,
}

/// Everything that changes while playing.
#[derive(Clone, Debug)]
pub struct GameState {
    pub rooms: Vec<Room>,
    pub room_index: usize,
    pub player: Position,
    /// A bomb went off in the current room.
    pub exploded: bool,
    /// The door of the last room was reached.
    pub escaped: bool,
}

impl GameState {
    pub fn new(rooms: Vec<Room>) -> Result<Self, GameError> {
        if rooms.is_empty() {
            return Err(GameError::NoRooms);
        }
        Ok(Self {
            rooms,
            room_index: 0,
            player: Position::ORIGIN,
            exploded: false,
            escaped: false,
        })
    }

    pub fn room(&self) -> &Room {
        &self.rooms[self.room_index]
    }

    pub fn door_open(&self) -> bool {
        self.room().is_complete()
    }

    pub fn is_last_room(&self) -> bool {
        self.room_index + 1 == self.rooms.len()
    }

    pub fn door_box() -> Aabb {
        Aabb::tile_at(DOOR_POSITION.0 as f32, DOOR_POSITION.1 as f32)
    }

    fn move_player(&mut self, controls: &Controls, elapsed: f32) {
        let distance = PLAYER_SPEED * elapsed;
        let mut at = self.player;
        if controls.left.pressed {
            at.x -= distance;
        }
        if controls.right.pressed {
            at.x += distance;
        }
        if controls.down.pressed {
            at.y -= distance;
        }
        if controls.up.pressed {
            at.y += distance;
        }
        self.player = at.clamped();
    }

    /// Advances the game by one frame.
    pub fn step(&mut self, controls: &Controls, elapsed: f32) -> Option<RoomEvent> {
        self.move_player(controls, elapsed);

        let player_box = Aabb::tile_at(self.player.x, self.player.y);
        let room_index = self.room_index;
        let room = &mut self.rooms[room_index];

        let mut detonated = false;
        for object in room.objects.iter_mut().filter(|o| !o.reached) {
            if !contact(&player_box, &Aabb::tile_at(object.x as f32, object.y as f32)) {
                continue;
            }
            object.reached = true;
            debug!("Reached {:?} at ({}, {})", object.kind, object.x, object.y);
            if object.kind == ObjectKind::Bomb {
                detonated = true;
                break;
            }
        }

        if detonated {
            info!("Bomb went off in room {}", room_index);
            room.reset_after_explosion();
            self.player = Position::ORIGIN;
            self.exploded = true;
            return Some(RoomEvent::Exploded);
        }

        if !room.is_complete() || !contact(&player_box, &Self::door_box()) {
            return None;
        }

        if self.is_last_room() {
            if self.escaped {
                return None;
            }
            info!("Reached the door of the last room");
            self.escaped = true;
            return Some(RoomEvent::Escaped);
        }

        self.room_index += 1;
        self.player = Position::ORIGIN;
        self.exploded = false;
        info!("Entering room {}", self.room_index);
        Some(RoomEvent::Advanced(self.room_index))
    }
}
