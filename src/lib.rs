//! Lane Hopper - a lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `gfx`: Asset-provider and drawing-surface seams plus frame composition
//! - `driver`: Frame loop, clock sampling, input pump
//! - `settings`: Session preferences

pub mod driver;
pub mod gfx;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Horizontal size of one grid cell (pixels)
    pub const CELL_WIDTH: f32 = 101.0;
    /// Vertical pitch between lanes (pixels)
    pub const CELL_HEIGHT: f32 = 83.0;
    /// Row pitch used when sizing the drawing surface. Lane sprites overdraw
    /// their 83-px lane, so the surface leaves extra room per row.
    pub const SURFACE_ROW_PITCH: u32 = 101;

    /// Enemies enter fully off-screen on the left
    pub const ENEMY_SPAWN_X: f32 = -100.0;
    /// Vertical nudge that centers an enemy sprite in its lane
    pub const ENEMY_Y_OFFSET: f32 = 25.0;
    /// Vertical nudge that centers the player sprite in its lane
    pub const PLAYER_Y_OFFSET: f32 = 23.0;

    /// Enemy speed range (pixels/second, uniform, left-to-right only)
    pub const ENEMY_MIN_SPEED: f32 = 100.0;
    pub const ENEMY_MAX_SPEED: f32 = 200.0;

    /// Board dimension ranges (inclusive), re-rolled on every reset
    pub const MIN_ROWS: u32 = 5;
    pub const MAX_ROWS: u32 = 7;
    pub const MIN_COLS: u32 = 5;
    pub const MAX_COLS: u32 = 9;

    /// Column the player starts in after every reset (columns are 1-based)
    pub const PLAYER_START_COLUMN: u32 = 3;

    /// Terminal banner styling
    pub const BANNER_FONT: &str = "50px sans-serif";
}

use consts::*;

/// Pixel x for a 1-based grid column
#[inline]
pub fn column_to_x(column: u32) -> f32 {
    (column - 1) as f32 * CELL_WIDTH
}

/// Pixel y for an enemy travelling in `lane`
#[inline]
pub fn lane_to_enemy_y(lane: u32) -> f32 {
    lane as f32 * CELL_HEIGHT - ENEMY_Y_OFFSET
}

/// Pixel y for the player standing in `lane`
#[inline]
pub fn lane_to_player_y(lane: u32) -> f32 {
    lane as f32 * CELL_HEIGHT - PLAYER_Y_OFFSET
}
