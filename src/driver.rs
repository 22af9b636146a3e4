//! Frame loop driver
//!
//! Samples a monotonic clock, feeds elapsed seconds into the simulation and
//! composes a frame, every time the host scheduler calls `frame`. The loop
//! has no natural end: it runs for as long as the host keeps calling.

use std::time::Instant;

use crate::gfx::{self, Resources, Surface, sprites};
use crate::sim::{Direction, GameState};

/// Monotonic time source, seconds since an arbitrary origin
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall clock backed by `Instant`
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Normalized input event producer. Unrecognized keys never surface here.
pub trait InputSource {
    /// Next pending directional event, if any. Drained once per frame.
    fn poll(&mut self) -> Option<Direction>;
}

/// The per-frame driver: input pump, clock sampling, update, draw
pub struct GameLoop<C, I, R, S>
where
    R: Resources,
    S: Surface<Image = R::Image>,
{
    clock: C,
    input: I,
    resources: R,
    surface: S,
    state: GameState,
    last_time: f64,
}

impl<C, I, R, S> GameLoop<C, I, R, S>
where
    C: Clock,
    I: InputSource,
    R: Resources,
    S: Surface<Image = R::Image>,
{
    /// Preload the sprite manifest, block until the provider signals ready,
    /// then roll the first board. The first frame's dt measures from here.
    pub fn start(clock: C, input: I, mut resources: R, mut surface: S, seed: u64) -> Self {
        let ready = resources.load(&sprites::manifest());
        if ready.recv().is_err() {
            // A provider that drops its sender without firing is broken;
            // there is nothing left to wait for
            log::error!("Resource provider dropped without signalling ready");
        }

        let state = GameState::new(seed);
        let (width, height) = state.board.surface_size();
        surface.resize(width, height);

        let last_time = clock.now();
        Self {
            clock,
            input,
            resources,
            surface,
            state,
            last_time,
        }
    }

    /// One scheduled tick: drain input, advance by elapsed seconds, draw
    pub fn frame(&mut self) {
        while let Some(direction) = self.input.poll() {
            if self.state.handle_input(direction) {
                // A reset rolled new board dimensions
                let (width, height) = self.state.board.surface_size();
                self.surface.resize(width, height);
            }
        }

        let now = self.clock.now();
        let dt = (now - self.last_time) as f32;

        match self.state.update(dt) {
            Some(event) => {
                gfx::draw::draw_terminal(&self.state, event, &self.resources, &mut self.surface)
            }
            None => gfx::draw::draw(&self.state, &self.resources, &mut self.surface),
        }

        self.last_time = now;
    }

    /// Read-only view of the running session
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable session access for hosts that script the session (demos, tests)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// The surface this loop draws to
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
