use crate::core::approximate::approximate_diff_with;
use crate::core::diff::calendar_diff_with;
use crate::domain::instant::Instant;
use crate::domain::model::{CalendarDuration, DiffMode, DiffReport, OrderPolicy};
use crate::domain::ports::{Clock, ConfigProvider};
use crate::utils::error::{DiffError, Result};

pub struct DiffEngine<C: Clock> {
    clock: C,
    mode: DiffMode,
    order_policy: OrderPolicy,
}

impl<C: Clock> DiffEngine<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            mode: DiffMode::default(),
            order_policy: OrderPolicy::default(),
        }
    }

    pub fn from_config<P: ConfigProvider>(clock: C, config: &P) -> Self {
        Self::new(clock)
            .with_mode(config.mode())
            .with_order_policy(config.order_policy())
    }

    pub fn with_mode(mut self, mode: DiffMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_order_policy(mut self, order_policy: OrderPolicy) -> Self {
        self.order_policy = order_policy;
        self
    }

    pub fn mode(&self) -> DiffMode {
        self.mode
    }

    pub fn order_policy(&self) -> OrderPolicy {
        self.order_policy
    }

    pub fn between(&self, start: &Instant, end: &Instant) -> Result<CalendarDuration> {
        tracing::debug!(
            "Computing {} difference {} -> {} (order policy: {})",
            self.mode.as_str(),
            start,
            end,
            self.order_policy.as_str()
        );

        let duration = match self.mode {
            DiffMode::Calendar => calendar_diff_with(start, end, self.order_policy)?,
            DiffMode::Approximate => approximate_diff_with(start, end, self.order_policy)?,
        };

        tracing::debug!("Result: {}", duration);
        Ok(duration)
    }

    /// Difference from the clock's current instant to `end`.
    pub fn until(&self, end: &Instant) -> Result<CalendarDuration> {
        let now = self.clock.now();
        self.between(&now, end)
    }

    /// Resolve the request described by `config` and compute it.
    pub fn run<P: ConfigProvider>(&self, config: &P) -> Result<DiffReport> {
        let end = config.end()?.ok_or_else(|| DiffError::MissingConfigError {
            field: "end".to_string(),
        })?;

        let start = match config.start()? {
            Some(start) => start,
            None => {
                let now = self.clock.now();
                tracing::info!("⏱️ No start instant given, using now: {}", now);
                now
            }
        };

        let duration = self.between(&start, &end)?;
        tracing::info!("✅ Computed difference {} -> {}", start, end);

        Ok(DiffReport {
            start,
            end,
            mode: self.mode,
            duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;

    fn at(s: &str) -> Instant {
        s.parse().unwrap()
    }

    #[test]
    fn test_until_uses_clock() {
        let engine = DiffEngine::new(FixedClock::new(at("2025-03-04T12:00:00")));
        let d = engine.until(&at("2026-03-04")).unwrap();
        assert_eq!(
            d,
            CalendarDuration {
                months: 11,
                days: 27,
                hours: 12,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_mode_switch() {
        let engine = DiffEngine::new(FixedClock::new(at("2025-01-01")))
            .with_mode(DiffMode::Approximate);
        let d = engine.between(&at("2025-01-01"), &at("2026-01-01")).unwrap();
        assert_eq!(d.years, 1);
        assert_eq!(d.days, 5);
    }

    #[test]
    fn test_order_policy_applies() {
        let engine = DiffEngine::new(FixedClock::new(at("2025-01-01")));
        assert!(engine.until(&at("2024-01-01")).is_err());

        let engine = engine.with_order_policy(OrderPolicy::Swap);
        assert_eq!(engine.until(&at("2024-01-01")).unwrap().years, 1);
    }
}
