//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Motion scales with the caller-supplied frame delta
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod board;
pub mod collision;
pub mod engine;
pub mod entity;

pub use board::{BoardConfig, LaneKind};
pub use collision::{enemy_hits_player, hitbox_overlap};
pub use engine::{GameEvent, GameState, Phase};
pub use entity::{Direction, Enemy, Player, Renderable};
