//! Lose-condition collision test
//!
//! Enemies collide with the player when they share a lane and either edge of
//! the enemy sprite falls strictly inside the player's narrowed hit-box.

use super::entity::{Enemy, Player};
use crate::consts::CELL_WIDTH;

/// Left inset of the player hit-box within its 101-px cell
pub const HITBOX_INSET: f32 = 25.0;
/// Width of the player hit-box
pub const HITBOX_WIDTH: f32 = 51.0;

/// True when either edge of the 101-px enemy sprite lies strictly inside the
/// player's hit-box. Both edges are tested independently: an enemy straddling
/// the whole hit-box with both edges outside it reports no hit. Intentional
/// tuning, widen only as a deliberate behavior change.
pub fn hitbox_overlap(enemy_x: f32, player_x: f32) -> bool {
    let lo = player_x + HITBOX_INSET;
    let hi = player_x + HITBOX_INSET + HITBOX_WIDTH;
    (enemy_x > lo && enemy_x < hi) || (enemy_x + CELL_WIDTH > lo && enemy_x + CELL_WIDTH < hi)
}

/// Full lose test: same lane plus pixel-span overlap
pub fn enemy_hits_player(enemy: &Enemy, player: &Player) -> bool {
    enemy.lane == player.lane && hitbox_overlap(enemy.pos.x, player.pos.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::BoardConfig;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    // Player at x=202 owns the hit-box (227, 278)

    #[test]
    fn trailing_edge_inside_hitbox() {
        // Enemy at 151: left edge misses, right edge (252) is inside
        assert!(hitbox_overlap(151.0, 202.0));
    }

    #[test]
    fn leading_edge_inside_hitbox() {
        assert!(hitbox_overlap(230.0, 202.0));
    }

    #[test]
    fn clear_miss_left_and_right() {
        assert!(!hitbox_overlap(100.0, 202.0));
        assert!(!hitbox_overlap(300.0, 202.0));
    }

    #[test]
    fn hitbox_bounds_are_strict() {
        // Right edge landing exactly on the lower bound does not count
        assert!(!hitbox_overlap(126.0, 202.0));
        // Left edge landing exactly on the upper bound does not count
        assert!(!hitbox_overlap(278.0, 202.0));
    }

    #[test]
    fn full_containment_goes_undetected() {
        // Enemy spanning [200, 301] covers the whole hit-box, yet neither
        // edge lies inside it
        assert!(!hitbox_overlap(200.0, 202.0));
    }

    #[test]
    fn different_lane_never_collides() {
        let board = BoardConfig::new(6, 5);
        let mut rng = Pcg32::seed_from_u64(1);
        let player = crate::sim::Player::spawn(&mut rng, &board);

        // An x overlap that would register in the player's lane
        let mut enemy = Enemy::spawn(1, 150.0);
        enemy.pos.x = player.pos.x + 30.0;
        assert!(hitbox_overlap(enemy.pos.x, player.pos.x));
        assert_ne!(enemy.lane, player.lane);
        assert!(!enemy_hits_player(&enemy, &player));
    }

    #[test]
    fn same_lane_overlap_collides() {
        let board = BoardConfig::new(6, 5);
        let mut rng = Pcg32::seed_from_u64(1);
        let mut player = crate::sim::Player::spawn(&mut rng, &board);
        player.lane = 2;
        player.pos.y = crate::lane_to_player_y(2);

        let mut enemy = Enemy::spawn(2, 150.0);
        enemy.pos.x = player.pos.x + 30.0;
        assert!(enemy_hits_player(&enemy, &player));
    }
}
