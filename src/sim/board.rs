//! Board geometry and lane layout
//!
//! The board is a grid of `rows` lanes by `cols` columns. Lane 0 is the goal
//! (water), the bottom two lanes are grass where the player starts, and every
//! lane in between is stone carrying enemy traffic.

use std::ops::Range;

use rand::Rng;

use crate::consts::*;

/// What a lane is made of, which picks its background strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneKind {
    Water,
    Stone,
    Grass,
}

/// Board dimensions, re-rolled on every reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Number of lanes, goal lane 0 at the top
    pub rows: u32,
    /// Number of columns, player columns are 1-based
    pub cols: u32,
}

impl BoardConfig {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Roll fresh dimensions, uniform over both ranges
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            rows: rng.random_range(MIN_ROWS..=MAX_ROWS),
            cols: rng.random_range(MIN_COLS..=MAX_COLS),
        }
    }

    /// Background strip for a given lane
    pub fn lane_kind(&self, lane: u32) -> LaneKind {
        if lane == 0 {
            LaneKind::Water
        } else if lane >= self.rows - 2 {
            LaneKind::Grass
        } else {
            LaneKind::Stone
        }
    }

    /// Lanes that carry enemy traffic (the stone band)
    pub fn enemy_lanes(&self) -> Range<u32> {
        1..self.rows - 2
    }

    /// Bottom lane, where the player spawns
    #[inline]
    pub fn start_lane(&self) -> u32 {
        self.rows - 1
    }

    /// Pixel x of the right board edge; enemies past it are out of bounds
    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.cols as f32 * CELL_WIDTH
    }

    /// Drawing surface size in pixels
    pub fn surface_size(&self) -> (u32, u32) {
        (self.cols * CELL_WIDTH as u32, self.rows * SURFACE_ROW_PITCH)
    }
}
