/// Default cap on a single frame's delta, in seconds.
pub const DEFAULT_MAX_DT: f64 = 0.25;

/// Smoothing weight given to each new FPS sample.
const FPS_SMOOTHING: f64 = 0.1;

/// Frame clock adapter.
/// Cleans up host-supplied frame deltas and keeps a smoothed FPS estimate.
pub struct FrameClock {
    /// Largest delta handed to the simulation in one frame.
    max_dt: f64,
    /// Total sanitised seconds seen so far.
    total: f64,
    /// Exponentially smoothed frames per second (0 until the first sample).
    fps: f64,
}

impl FrameClock {
    pub fn new(max_dt: f64) -> Self {
        Self {
            max_dt: if max_dt > 0.0 { max_dt } else { DEFAULT_MAX_DT },
            total: 0.0,
            fps: 0.0,
        }
    }

    /// Sanitise one frame delta. Returns the seconds to feed the simulation.
    ///
    /// Negative or non-finite deltas become 0. Anything above `max_dt` is
    /// capped, so a tab that was asleep does not jump the orbit forward.
    pub fn sample(&mut self, frame_dt: f64) -> f64 {
        let dt = if frame_dt.is_finite() && frame_dt > 0.0 {
            frame_dt.min(self.max_dt)
        } else {
            0.0
        };
        self.total += dt;

        if frame_dt.is_finite() && frame_dt > 0.0 {
            let instant = 1.0 / frame_dt;
            self.fps = if self.fps == 0.0 {
                instant
            } else {
                self.fps + (instant - self.fps) * FPS_SMOOTHING
            };
        }
        dt
    }

    /// Smoothed frames per second.
    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn max_dt(&self) -> f64 {
        self.max_dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_normal_deltas_through() {
        let mut clock = FrameClock::default();
        assert!((clock.sample(1.0 / 60.0) - 1.0 / 60.0).abs() < 1e-12);
        assert!((clock.total() - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn caps_large_deltas() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.sample(5.0), 0.1);
        assert_eq!(clock.max_dt(), 0.1);
    }

    #[test]
    fn bad_deltas_become_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.sample(-0.5), 0.0);
        assert_eq!(clock.sample(f64::NAN), 0.0);
        assert_eq!(clock.sample(f64::INFINITY), 0.0);
        assert_eq!(clock.total(), 0.0);
        assert_eq!(clock.fps(), 0.0);
    }

    #[test]
    fn fps_converges_to_frame_rate() {
        let mut clock = FrameClock::default();
        for _ in 0..200 {
            clock.sample(1.0 / 30.0);
        }
        assert!((clock.fps() - 30.0).abs() < 0.01, "fps was {}", clock.fps());
    }

    #[test]
    fn non_positive_cap_falls_back_to_default() {
        let clock = FrameClock::new(0.0);
        assert_eq!(clock.max_dt(), DEFAULT_MAX_DT);
    }
}
