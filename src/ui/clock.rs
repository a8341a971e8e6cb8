//! Frame pacing

use std::time::{Duration, Instant};

/// Source of frame timestamps and the wait between frames
pub trait FrameClock {
    fn now(&self) -> Instant;

    /// Block until the next frame is due
    fn wait_next_frame(&mut self);
}

/// Wall-clock pacing at a fixed frame rate
///
/// Sleeps up to the next frame boundary. If a frame overruns, the schedule
/// restarts from the current time instead of trying to catch up.
#[derive(Debug, Clone)]
pub struct RealtimeClock {
    frame: Duration,
    next_frame: Instant,
}

impl RealtimeClock {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            next_frame: Instant::now() + frame,
        }
    }
}

impl FrameClock for RealtimeClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn wait_next_frame(&mut self) {
        let now = Instant::now();
        if self.next_frame > now {
            std::thread::sleep(self.next_frame - now);
            self.next_frame += self.frame;
        } else {
            self.next_frame = now + self.frame;
        }
    }
}

/// Virtual time that advances exactly one frame per wait, never sleeping
#[derive(Debug, Clone)]
pub struct SteppedClock {
    now: Instant,
    frame: Duration,
}

impl SteppedClock {
    pub fn new(start: Instant, frame: Duration) -> Self {
        Self { now: start, frame }
    }
}

impl FrameClock for SteppedClock {
    fn now(&self) -> Instant {
        self.now
    }

    fn wait_next_frame(&mut self) {
        self.now += self.frame;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepped_clock_advances_one_frame() {
        let start = Instant::now();
        let mut clock = SteppedClock::new(start, Duration::from_millis(20));
        assert_eq!(clock.now(), start);
        clock.wait_next_frame();
        clock.wait_next_frame();
        assert_eq!(clock.now(), start + Duration::from_millis(40));
    }

    #[test]
    fn test_realtime_clock_waits_about_one_frame() {
        let frame = Duration::from_millis(5);
        let mut clock = RealtimeClock::new(frame);
        let before = Instant::now();
        clock.wait_next_frame();
        clock.wait_next_frame();
        assert!(before.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn test_realtime_clock_resyncs_after_overrun() {
        let frame = Duration::from_millis(1);
        let mut clock = RealtimeClock::new(frame);
        std::thread::sleep(Duration::from_millis(10));
        clock.wait_next_frame();
        assert!(clock.next_frame > Instant::now() - frame);
    }
}
