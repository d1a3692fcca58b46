//! Blocking time suspension between ticks
//!
//! The loop never calls `thread::sleep` directly. Binaries hand it a
//! [`RealClock`]; tests and `--no-delay` runs hand it a [`VirtualClock`].

use std::time::Duration;

pub trait Clock {
    /// Block the caller for `duration`
    fn sleep(&mut self, duration: Duration);
}

/// Wall-clock sleep on the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct RealClock;

impl Clock for RealClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Records requested suspensions and returns immediately
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    naps: Vec<Duration>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every suspension requested so far, in order
    pub fn naps(&self) -> &[Duration] {
        &self.naps
    }

    /// Total virtual time that has passed
    pub fn elapsed(&self) -> Duration {
        self.naps.iter().sum()
    }
}

impl Clock for VirtualClock {
    fn sleep(&mut self, duration: Duration) {
        self.naps.push(duration);
    }
}
