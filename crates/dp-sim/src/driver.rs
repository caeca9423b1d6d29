//! Real-time simulation loop.
//!
//! [`Simulation`] owns the single live [`PendulumState`] and bridges to an
//! external display: each tick it applies one input event, hands the current
//! state to a [`RenderSink`], then advances the state by one RK4 step. Frame
//! pacing is left to the display.

use dp_core::Real;
use rand::Rng;

use crate::integrator::step;
use crate::render::{Frame, Viewport};
use crate::reset::ResetPolicy;
use crate::state::PendulumState;

/// One polled input per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputEvent {
    #[default]
    None,
    Quit,
    Resize {
        width: u32,
        height: u32,
    },
    Reset,
}

/// Source of per-tick input (window events, a script, a test fixture).
pub trait InputSource {
    fn poll(&mut self) -> InputEvent;
}

/// Consumer of rendered frames. Failures are returned to the caller of
/// [`Simulation::tick`] untouched.
pub trait RenderSink {
    type Error;

    fn render(&mut self, frame: &Frame, state: &PendulumState) -> Result<(), Self::Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

pub struct Simulation<R> {
    state: PendulumState,
    viewport: Viewport,
    scale: Real,
    policy: ResetPolicy,
    rng: R,
    ticks: u64,
}

impl<R: Rng> Simulation<R> {
    pub fn new(state: PendulumState, viewport: Viewport, policy: ResetPolicy, rng: R) -> Self {
        let scale = viewport.fit_scale(state.params());
        Self {
            state,
            viewport,
            scale,
            policy,
            rng,
            ticks: 0,
        }
    }

    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Pixels per metre for the current viewport.
    pub fn scale(&self) -> Real {
        self.scale
    }

    /// Completed integration steps since start.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated time since start (s). Resets do not rewind it.
    pub fn time(&self) -> Real {
        self.ticks as Real * self.state.dt()
    }

    pub fn frame(&self) -> Frame {
        Frame::compose(&self.state, self.viewport, self.scale)
    }

    /// Apply an input event without rendering or stepping.
    pub fn handle(&mut self, event: InputEvent) -> TickOutcome {
        match event {
            InputEvent::None => {}
            InputEvent::Quit => return TickOutcome::Quit,
            InputEvent::Resize { width, height } => {
                self.viewport = Viewport::new(width, height);
                // Scale depends only on rod lengths, which resets never change.
                self.scale = self.viewport.fit_scale(self.state.params());
                tracing::debug!(width, height, scale = self.scale, "viewport resized");
            }
            InputEvent::Reset => {
                self.state = self.policy.apply(&self.state, &mut self.rng);
            }
        }
        TickOutcome::Continue
    }

    /// One tick: apply `event`, render the current state, then advance it.
    ///
    /// A quit event returns before rendering.
    pub fn tick<S: RenderSink + ?Sized>(
        &mut self,
        event: InputEvent,
        sink: &mut S,
    ) -> Result<TickOutcome, S::Error> {
        if self.handle(event) == TickOutcome::Quit {
            return Ok(TickOutcome::Quit);
        }

        sink.render(&self.frame(), &self.state)?;

        self.state = step(&self.state);
        self.ticks += 1;
        tracing::trace!(tick = self.ticks, config = ?self.state.config, "tick");

        Ok(TickOutcome::Continue)
    }

    /// Tick until the input source reports quit. Returns the number of ticks run.
    pub fn run<I, S>(&mut self, input: &mut I, sink: &mut S) -> Result<u64, S::Error>
    where
        I: InputSource + ?Sized,
        S: RenderSink + ?Sized,
    {
        let start = self.ticks;
        while self.tick(input.poll(), sink)? == TickOutcome::Continue {}
        Ok(self.ticks - start)
    }
}
