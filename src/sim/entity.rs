//! Entities: the player and the enemies it must dodge
//!
//! Flat structs sharing the `Renderable` capability. Grid state (lane/column)
//! and pixel state (pos) are kept in lockstep: positions are derived through
//! the helpers in the crate root and every move shifts both views together.

use glam::Vec2;
use rand::Rng;

use super::board::BoardConfig;
use crate::consts::*;
use crate::{column_to_x, lane_to_enemy_y, lane_to_player_y};

/// Sprite key for enemy bugs
pub const ENEMY_BUG: &str = "images/enemy-bug.png";

/// Cosmetic player characters; one is picked at random per reset
pub const PLAYER_CHARACTERS: [&str; 5] = [
    "images/char-boy.png",
    "images/char-cat-girl.png",
    "images/char-horn-girl.png",
    "images/char-pink-girl.png",
    "images/char-princess-girl.png",
];

/// Normalized directional input symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Anything the frame composer can draw: a sprite key and a pixel position
pub trait Renderable {
    fn sprite(&self) -> &'static str;
    fn pos(&self) -> Vec2;
}

/// A horizontally-moving obstacle
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    /// Lane this enemy travels in, constant for its lifetime
    pub lane: u32,
    /// Horizontal speed in pixels/second, non-negative (traffic flows left to right)
    pub vel_x: f32,
}

impl Enemy {
    /// Spawn at the off-screen left anchor for `lane`
    pub fn spawn(lane: u32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(ENEMY_SPAWN_X, lane_to_enemy_y(lane)),
            lane,
            vel_x: speed,
        }
    }

    /// Spawn with a random stone lane and speed; every reset and recycle
    /// goes through here
    pub fn random(rng: &mut impl Rng, board: &BoardConfig) -> Self {
        let lane = rng.random_range(board.enemy_lanes());
        let speed = rng.random_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED);
        Self::spawn(lane, speed)
    }

    /// Advance by `vel_x * dt`. Returns false once the sprite has crossed the
    /// right board edge and the slot must be recycled.
    pub fn update(&mut self, dt: f32, board: &BoardConfig) -> bool {
        self.pos.x += self.vel_x * dt;
        self.pos.x <= board.right_edge()
    }
}

impl Renderable for Enemy {
    fn sprite(&self) -> &'static str {
        ENEMY_BUG
    }

    fn pos(&self) -> Vec2 {
        self.pos
    }
}

/// The player-controlled sprite, aligned to whole grid cells
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// Current lane, 0 is the goal row
    pub lane: u32,
    /// Current column in [1, cols]
    pub column: u32,
    sprite: &'static str,
}

impl Player {
    /// Fresh player at the start cell with a random character sprite
    pub fn spawn(rng: &mut impl Rng, board: &BoardConfig) -> Self {
        let sprite = PLAYER_CHARACTERS[rng.random_range(0..PLAYER_CHARACTERS.len())];
        let lane = board.start_lane();
        let column = PLAYER_START_COLUMN;
        Self {
            pos: Vec2::new(column_to_x(column), lane_to_player_y(lane)),
            lane,
            column,
            sprite,
        }
    }

    /// Move one whole cell, silently ignoring moves that would leave the
    /// board. No wraparound.
    pub fn handle_input(&mut self, direction: Direction, board: &BoardConfig) {
        match direction {
            Direction::Left if self.column > 1 => {
                self.column -= 1;
                self.pos.x -= CELL_WIDTH;
            }
            Direction::Right if self.column < board.cols => {
                self.column += 1;
                self.pos.x += CELL_WIDTH;
            }
            Direction::Up if self.lane > 0 => {
                self.lane -= 1;
                self.pos.y -= CELL_HEIGHT;
            }
            Direction::Down if self.lane < board.rows - 1 => {
                self.lane += 1;
                self.pos.y += CELL_HEIGHT;
            }
            _ => {}
        }
    }
}

impl Renderable for Player {
    fn sprite(&self) -> &'static str {
        self.sprite
    }

    fn pos(&self) -> Vec2 {
        self.pos
    }
}
