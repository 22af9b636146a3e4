//! Frame composition
//!
//! Read-only over the simulation: lane strips top to bottom, then every
//! enemy, then the player. Terminal screens are composed once, at transition
//! time, and left on the surface untouched until the next reset.

use crate::consts::*;
use crate::sim::{GameEvent, GameState, LaneKind, Renderable};

use super::{Resources, Surface, TextAlign, sprites};

/// Banner text for the two terminal screens
pub const WIN_BANNER: &str = "YOU WIN";
pub const LOSE_BANNER: &str = "YOU LOSE";

fn lane_sprite(kind: LaneKind) -> &'static str {
    match kind {
        LaneKind::Water => sprites::WATER_BLOCK,
        LaneKind::Stone => sprites::STONE_BLOCK,
        LaneKind::Grass => sprites::GRASS_BLOCK,
    }
}

/// Draw the live frame. No-op while the session sits on a terminal screen.
pub fn draw<R, S>(state: &GameState, resources: &R, surface: &mut S)
where
    R: Resources,
    S: Surface<Image = R::Image>,
{
    if state.is_terminal() {
        return;
    }
    draw_frame(state, resources, surface);
}

/// Compose one full frame: background strips, enemies, player, in that order.
/// The player can cover an enemy only through draw order, there is no z-index.
pub fn draw_frame<R, S>(state: &GameState, resources: &R, surface: &mut S)
where
    R: Resources,
    S: Surface<Image = R::Image>,
{
    for lane in 0..state.board.rows {
        let sprite = lane_sprite(state.board.lane_kind(lane));
        for col in 0..state.board.cols {
            surface.draw_image(
                resources.get(sprite),
                col as f32 * CELL_WIDTH,
                lane as f32 * CELL_HEIGHT,
            );
        }
    }

    for enemy in &state.enemies {
        draw_entity(enemy, resources, surface);
    }
    draw_entity(&state.player, resources, surface);
}

/// Compose the terminal screen: the final frame plus a centered banner.
/// Called exactly once, on the frame the transition fires.
pub fn draw_terminal<R, S>(state: &GameState, event: GameEvent, resources: &R, surface: &mut S)
where
    R: Resources,
    S: Surface<Image = R::Image>,
{
    draw_frame(state, resources, surface);

    let banner = match event {
        GameEvent::Won => WIN_BANNER,
        GameEvent::Lost => LOSE_BANNER,
    };
    let (width, height) = state.board.surface_size();
    surface.set_text_align(TextAlign::Center);
    surface.set_font(BANNER_FONT);
    surface.fill_text(banner, width as f32 / 2.0, height as f32 / 2.0);
    log::debug!("Terminal frame drawn: {}", banner);
}

fn draw_entity<R, S>(entity: &impl Renderable, resources: &R, surface: &mut S)
where
    R: Resources,
    S: Surface<Image = R::Image>,
{
    let pos = entity.pos();
    surface.draw_image(resources.get(entity.sprite()), pos.x, pos.y);
}
