use crate::domain::instant::Instant;
use crate::domain::ports::Clock;

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        chrono::Local::now().naive_local().into()
    }
}

/// Always returns the same instant; used for reproducible runs and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: Instant,
}

impl FixedClock {
    pub fn new(instant: Instant) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.instant
    }
}
