//! Time management utilities
//!
//! The simulation is driven by externally supplied timestamps (the host's
//! frame callback), not by polling `Instant`, so every delta is reproducible
//! in tests.

/// Delta used for the very first frame, when there is no previous timestamp
pub const FALLBACK_DELTA: f32 = 1.0 / 60.0;

/// Frame clock turning host timestamps into per-frame deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_timestamp: Option<f64>,
    delta_time: f32,
    total_time: f64,
    frame_count: u64,
}

impl FrameClock {
    /// Create a clock that has not seen any frame yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `timestamp` (seconds) and return the delta since the
    /// previous frame
    ///
    /// The first frame after creation or [`reset`](Self::reset) returns
    /// [`FALLBACK_DELTA`] so a session never starts with a huge step.
    /// A timestamp that goes backwards yields a zero delta.
    pub fn advance(&mut self, timestamp: f64) -> f32 {
        let delta = match self.last_timestamp {
            None => FALLBACK_DELTA,
            Some(last) => (timestamp - last).max(0.0) as f32,
        };
        self.last_timestamp = Some(timestamp);
        self.delta_time = delta;
        self.total_time += f64::from(delta);
        self.frame_count += 1;
        delta
    }

    /// Forget the previous timestamp; the next frame uses the fallback delta
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Get the time since the last frame in seconds
    pub const fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the accumulated simulated time in seconds
    pub const fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Get the current frame count
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Elapsed-time countdown advanced explicitly each tick
///
/// Replaces fire-and-forget scheduled actions: the owner ticks it and checks
/// [`is_finished`](Self::is_finished) in the same frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    duration: f32,
    elapsed: f32,
}

impl Countdown {
    /// Create a countdown of `duration` seconds
    pub const fn new(duration: f32) -> Self {
        Self { duration, elapsed: 0.0 }
    }

    /// Advance by `delta` seconds; returns `true` once the countdown is done
    pub fn tick(&mut self, delta: f32) -> bool {
        self.elapsed = (self.elapsed + delta).min(self.duration.max(0.0));
        self.is_finished()
    }

    /// Whether the full duration has elapsed
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Seconds left before the countdown finishes
    pub fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }

    /// Seconds elapsed so far
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Total duration in seconds
    pub const fn duration(&self) -> f32 {
        self.duration
    }

    /// Fraction of the duration elapsed, in `[0, 1]`
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_frame_uses_fallback() {
        let mut clock = FrameClock::new();
        assert_relative_eq!(clock.advance(1234.5), FALLBACK_DELTA);
        assert_relative_eq!(clock.advance(1234.6), 0.1, epsilon = 1e-5);
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_reset_restores_fallback() {
        let mut clock = FrameClock::new();
        clock.advance(1.0);
        clock.advance(2.0);
        clock.reset();
        assert_relative_eq!(clock.advance(100.0), FALLBACK_DELTA);
    }

    #[test]
    fn test_backwards_timestamp_is_zero_delta() {
        let mut clock = FrameClock::new();
        clock.advance(5.0);
        assert_eq!(clock.advance(4.0), 0.0);
    }

    #[test]
    fn test_countdown_finishes() {
        let mut countdown = Countdown::new(0.3);
        assert!(!countdown.tick(0.1));
        assert!(!countdown.tick(0.1));
        assert!(countdown.tick(0.15));
        assert_eq!(countdown.remaining(), 0.0);
        assert_relative_eq!(countdown.progress(), 1.0);
    }

    #[test]
    fn test_zero_duration_countdown_is_finished() {
        let countdown = Countdown::new(0.0);
        assert!(countdown.is_finished());
    }
}
