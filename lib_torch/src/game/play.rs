use std::fs;
use std::path::Path;

use log::info;

use super::input::{Controls, InputEvent};
use super::object::{Room, SpriteKind};
use super::state::{GameState, RoomEvent};
use super::GameError;
use crate::asset::{decode, format::AssetPack};
use crate::constants::{
    BACKGROUND_HEIGHT, BACKGROUND_PALETTE, BACKGROUND_WIDTH, CLEAR_TILE, DOOR_POSITION,
    EXPLOSION_COLOR, LIGHT_RADIUS, SOLID_TILE, TILE_SIZE,
};
use crate::ppu::{Ppu, Sprite, Tile, TRANSPARENT};

pub struct PlayMode {
    pub state: GameState,
    pub controls: Controls,
    pub ppu: Ppu,
}

impl PlayMode {
    pub fn new(pack: AssetPack) -> Result<Self, GameError> {
        let mut ppu = Ppu::new();
        ppu.load_tables(&pack.palettes, &pack.tiles)?;

        // Fixed background tiles: 254 is solid darkness, 255 is lit floor
        ppu.tile_table[SOLID_TILE as usize] = Tile::filled(2);
        ppu.tile_table[CLEAR_TILE as usize] = Tile::filled(0);

        let rooms = pack
            .rooms
            .iter()
            .map(|records| Room::from_records(records))
            .collect();

        Ok(Self {
            state: GameState::new(rooms)?,
            controls: Controls::default(),
            ppu,
        })
    }

    pub fn load(path: &Path) -> Result<Self, GameError> {
        info!("Loading {}", path.display());
        let data = fs::read(path)?;
        Self::new(decode(&data)?)
    }

    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        self.controls.handle(event)
    }

    pub fn update(&mut self, elapsed: f32) -> Option<RoomEvent> {
        let event = self.state.step(&self.controls, elapsed);
        self.controls.clear_downs();
        event
    }

    /// Writes the current game state into the PPU tables.
    pub fn draw(&mut self) -> &Ppu {
        let ppu = &mut self.ppu;
        let state = &self.state;

        ppu.background_color = if state.exploded {
            EXPLOSION_COLOR
        } else {
            TRANSPARENT
        };

        // Light a circle of background tiles around the player
        let tile_size = TILE_SIZE as f32;
        let center_x = state.player.x / tile_size + 0.5;
        let center_y = state.player.y / tile_size + 0.5;
        for y in 0..BACKGROUND_HEIGHT {
            for x in 0..BACKGROUND_WIDTH {
                let dx = x as f32 + 0.5 - center_x;
                let dy = y as f32 + 0.5 - center_y;
                let tile = if (dx * dx + dy * dy).sqrt() < LIGHT_RADIUS {
                    CLEAR_TILE
                } else {
                    SOLID_TILE
                };
                ppu.background[x + BACKGROUND_WIDTH * y] =
                    Ppu::background_entry(tile, BACKGROUND_PALETTE);
            }
        }
        ppu.background_position = (0, 0);

        let mut sprites = Vec::with_capacity(ppu.sprites.len());
        sprites.push(Sprite {
            x: state.player.x as u8,
            y: state.player.y as u8,
            index: SpriteKind::Flame.tile(),
            attributes: SpriteKind::Flame.palette(),
        });
        if state.door_open() {
            sprites.push(Sprite {
                x: DOOR_POSITION.0,
                y: DOOR_POSITION.1,
                index: SpriteKind::Door.tile(),
                attributes: SpriteKind::Door.palette(),
            });
        }
        for object in &state.room().objects {
            let kind = SpriteKind::for_object(object);
            sprites.push(Sprite {
                x: object.x,
                y: object.y,
                index: kind.tile(),
                attributes: kind.palette(),
            });
        }

        for (slot, sprite) in ppu.sprites.iter_mut().enumerate() {
            *sprite = sprites.get(slot).copied().unwrap_or(Sprite::HIDDEN);
        }

        &self.ppu
    }
}
