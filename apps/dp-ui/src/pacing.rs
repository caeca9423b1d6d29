//! Fixed-rate tick scheduling against the frame clock.

/// Cap on catch-up ticks after a stalled frame.
pub const MAX_TICKS_PER_FRAME: u32 = 4;

/// Slack for frame times that land exactly on a tick boundary.
const BOUNDARY_EPS: f64 = 1e-9;

/// Counts fixed-period ticks due at each frame.
///
/// The fractional remainder carries over between frames, so the long-run
/// tick rate matches the period regardless of the frame rate. A backlog
/// beyond [`MAX_TICKS_PER_FRAME`] is dropped.
#[derive(Clone, Copy, Debug)]
pub struct TickClock {
    period_s: f64,
    last_s: Option<f64>,
}

impl TickClock {
    pub fn new(period_s: f64) -> Self {
        Self {
            period_s,
            last_s: None,
        }
    }

    pub fn period_s(&self) -> f64 {
        self.period_s
    }

    /// Number of ticks to run at `now_s`. The first call always yields one.
    pub fn due(&mut self, now_s: f64) -> u32 {
        let Some(last) = self.last_s else {
            self.last_s = Some(now_s);
            return 1;
        };

        let due = ((now_s - last) / self.period_s + BOUNDARY_EPS).floor().max(0.0) as u32;
        if due > MAX_TICKS_PER_FRAME {
            self.last_s = Some(now_s);
            return MAX_TICKS_PER_FRAME;
        }
        self.last_s = Some(last + f64::from(due) * self.period_s);
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks_over(clock: &mut TickClock, frame_s: f64, frames: u32) -> u32 {
        (0..frames).map(|i| clock.due(f64::from(i) * frame_s)).sum()
    }

    #[test]
    fn first_frame_ticks_once() {
        let mut clock = TickClock::new(0.025);
        assert_eq!(clock.due(12.0), 1);
        assert_eq!(clock.due(12.01), 0);
    }

    #[test]
    fn remainder_carries_between_frames() {
        // 40 Hz ticks against a 60 Hz display: one second of frames.
        let mut clock = TickClock::new(1.0 / 40.0);
        assert_eq!(ticks_over(&mut clock, 1.0 / 60.0, 60), 40);
    }

    #[test]
    fn tick_rate_holds_over_a_long_run() {
        let mut clock = TickClock::new(1.0 / 40.0);
        let ticks = ticks_over(&mut clock, 1.0 / 144.0, 144 * 30);
        assert!((1199..=1201).contains(&ticks), "ticks {ticks}");
    }

    #[test]
    fn stall_is_capped_and_backlog_dropped() {
        let mut clock = TickClock::new(0.025);
        assert_eq!(clock.due(0.0), 1);
        assert_eq!(clock.due(1.0), MAX_TICKS_PER_FRAME);
        // Schedule restarts from the stalled frame.
        assert_eq!(clock.due(1.01), 0);
        assert_eq!(clock.due(1.025), 1);
    }

    #[test]
    fn clock_going_backwards_yields_nothing() {
        let mut clock = TickClock::new(0.025);
        clock.due(5.0);
        assert_eq!(clock.due(4.0), 0);
    }
}
