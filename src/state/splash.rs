//! One-shot timer that moves the splash screen along.

use std::time::{Duration, Instant};

/// Default time the splash screen stays up.
pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_millis(1400);

/// Fires once after its delay unless cancelled first.
#[derive(Debug, Clone)]
pub struct SplashTimer {
    deadline: Option<Instant>,
}

impl SplashTimer {
    /// Arm a timer that becomes due `delay` after `now`.
    pub fn start(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: Some(now + delay),
        }
    }

    /// Disarm the timer. It will never fire afterwards.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once, the first time it is polled at or after
    /// the deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the timer is due, if armed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}
