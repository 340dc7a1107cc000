//! Scoped timer resource for the carousel.
//!
//! Rotation deadlines are plain data owned by the controller, polled with
//! an explicit `now` from the UI tick. Nothing fires after `disarm()`, so
//! teardown can never mutate state behind a disposed controller.

use std::time::{Duration, Instant};

/// A due timer, to be translated into a carousel intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationSignal {
    /// The auto-advance interval elapsed.
    Advance,
    /// The post-navigation cooldown elapsed.
    CooldownOver,
}

/// Owns the auto-advance and cooldown deadlines for one carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationClock {
    interval: Duration,
    cooldown: Duration,
    next_advance: Option<Instant>,
    cooldown_until: Option<Instant>,
}

impl RotationClock {
    pub fn new(interval: Duration, cooldown: Duration) -> Self {
        Self {
            interval,
            cooldown,
            next_advance: None,
            cooldown_until: None,
        }
    }

    /// Schedule the next auto-advance one interval from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next_advance = Some(now + self.interval);
    }

    /// Cancel all pending deadlines. Subsequent polls yield nothing until
    /// the clock is armed again.
    pub fn disarm(&mut self) {
        self.next_advance = None;
        self.cooldown_until = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_advance.is_some() || self.cooldown_until.is_some()
    }

    /// Manual navigation happened: suspend auto-advance and start the
    /// cooldown window. A cooldown already in flight is restarted.
    pub fn begin_cooldown(&mut self, now: Instant) {
        self.next_advance = None;
        self.cooldown_until = Some(now + self.cooldown);
    }

    /// Collect every deadline that is due at `now`.
    ///
    /// When the cooldown expires, the advance deadline is re-armed a full
    /// interval out so the viewer gets one quiet interval before rotation
    /// resumes. An elapsed advance deadline re-arms itself.
    pub fn poll(&mut self, now: Instant) -> Vec<RotationSignal> {
        let mut due = Vec::new();

        if let Some(deadline) = self.cooldown_until {
            if now >= deadline {
                self.cooldown_until = None;
                self.next_advance = Some(now + self.interval);
                due.push(RotationSignal::CooldownOver);
            }
        }

        if let Some(deadline) = self.next_advance {
            if now >= deadline {
                self.next_advance = Some(now + self.interval);
                due.push(RotationSignal::Advance);
            }
        }

        due
    }
}
