//! Lane Hopper entry point
//!
//! Runs a headless autoplay session: an autopilot nudges the player toward
//! the goal lane while the frame loop ticks at the configured rate. Useful
//! as a smoke run and as a reference host for the driver seams.

use std::thread;
use std::time::Duration;

use lane_hopper::Settings;
use lane_hopper::driver::{GameLoop, InputSource, SystemClock};
use lane_hopper::gfx::headless::{HeadlessResources, HeadlessSurface};
use lane_hopper::sim::{Direction, Phase};

/// Demo input: presses Up every few polls. While a terminal screen is up
/// that same press restarts the session, exactly like any other key.
struct Autopilot {
    polls: u64,
    cadence: u64,
}

impl Autopilot {
    fn new(cadence: u64) -> Self {
        Self { polls: 0, cadence }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self) -> Option<Direction> {
        self.polls += 1;
        if self.polls % self.cadence == 0 {
            Some(Direction::Up)
        } else {
            None
        }
    }
}

fn main() {
    env_logger::init();

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Lane Hopper demo starting, seed {}", seed);

    let mut game = GameLoop::start(
        SystemClock::new(),
        Autopilot::new(30),
        HeadlessResources::new(),
        HeadlessSurface::new(),
        seed,
    );

    let frame_budget = Duration::from_secs_f64(1.0 / settings.tick_rate.max(1) as f64);
    let mut wins = 0u32;
    let mut losses = 0u32;

    for _ in 0..settings.demo_frames {
        let was_terminal = game.state().is_terminal();
        game.frame();

        if !was_terminal && game.state().is_terminal() {
            match game.state().phase {
                Phase::Won => wins += 1,
                Phase::Lost => losses += 1,
                Phase::Playing => {}
            }
        }

        thread::sleep(frame_budget);
    }

    log::info!(
        "Demo over after {} frames: {} won, {} lost",
        settings.demo_frames,
        wins,
        losses
    );
}
