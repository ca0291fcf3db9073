//! Frame pacing and blocking pauses
//!
//! Everything time-related goes through the [`Clock`] trait so the game loop
//! can be driven by a fake clock in tests.

use std::time::{Duration, Instant};

/// Source of time for the game loop
pub trait Clock {
    fn now(&self) -> Instant;

    /// Blocks the calling thread for `duration`
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by `std::thread::sleep`
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Caps the loop at a fixed number of frames per second
///
/// Each `tick()` sleeps for whatever is left of the frame budget since the
/// previous tick. A frame that ran over budget is not made up later.
pub struct FrameLimiter {
    frame_duration: Duration,
    last_tick: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(frame_rate: u32) -> Self {
        FrameLimiter {
            frame_duration: Duration::from_secs(1) / frame_rate.max(1),
            last_tick: None,
        }
    }

    #[cfg(test)]
    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Sleeps until the current frame has used its full budget.
    ///
    /// Returns the time actually slept.
    pub fn tick(&mut self, clock: &mut impl Clock) -> Duration {
        let now = clock.now();
        let slept = match self.last_tick {
            Some(last) => {
                let elapsed = now.saturating_duration_since(last);
                self.frame_duration.saturating_sub(elapsed)
            }
            None => Duration::ZERO,
        };

        if !slept.is_zero() {
            clock.sleep(slept);
        }
        self.last_tick = Some(clock.now());
        slept
    }
}

/// Clock that only moves when told to (or when slept on)
#[cfg(test)]
pub struct ManualClock {
    start: Instant,
    elapsed: Duration,
    pub sleeps: Vec<Duration>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        ManualClock {
            start: Instant::now(),
            elapsed: Duration::ZERO,
            sleeps: Vec::new(),
        }
    }

    pub fn advance(&mut self, duration: Duration) {
        self.elapsed += duration;
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.start + self.elapsed
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
        self.elapsed += duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration_for_common_rates() {
        assert_eq!(FrameLimiter::new(60).frame_duration(), Duration::from_secs(1) / 60);
        assert_eq!(FrameLimiter::new(144).frame_duration(), Duration::from_secs(1) / 144);
    }

    #[test]
    fn test_first_tick_does_not_sleep() {
        let mut clock = ManualClock::new();
        let mut limiter = FrameLimiter::new(60);

        assert_eq!(limiter.tick(&mut clock), Duration::ZERO);
        assert!(clock.sleeps.is_empty());
    }

    #[test]
    fn test_tick_sleeps_remaining_budget() {
        let mut clock = ManualClock::new();
        let mut limiter = FrameLimiter::new(50); // 20ms frames
        limiter.tick(&mut clock);

        clock.advance(Duration::from_millis(5));
        let slept = limiter.tick(&mut clock);

        assert_eq!(slept, Duration::from_millis(15));
        assert_eq!(clock.sleeps, vec![Duration::from_millis(15)]);
    }

    #[test]
    fn test_slow_frame_does_not_sleep() {
        let mut clock = ManualClock::new();
        let mut limiter = FrameLimiter::new(50);
        limiter.tick(&mut clock);

        clock.advance(Duration::from_millis(35));
        assert_eq!(limiter.tick(&mut clock), Duration::ZERO);
        assert!(clock.sleeps.is_empty());
    }

    #[test]
    fn test_zero_rate_is_treated_as_one() {
        assert_eq!(FrameLimiter::new(0).frame_duration(), Duration::from_secs(1));
    }
}
