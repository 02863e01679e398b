//! Frame pacing

use std::io;
use std::time::Duration;

/// Waits between frames. An error ends the animation loop.
pub trait Pacer {
    fn wait(&mut self) -> io::Result<()>;
}

/// Sleeps the calling thread for a fixed interval.
#[derive(Debug, Clone, Copy)]
pub struct FixedInterval {
    interval: Duration,
}

impl FixedInterval {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Pacer for FixedInterval {
    fn wait(&mut self) -> io::Result<()> {
        std::thread::sleep(self.interval);
        Ok(())
    }
}
