use crate::core::calendar::{MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use crate::core::diff::resolve_order;
use crate::domain::instant::Instant;
use crate::domain::model::{CalendarDuration, OrderPolicy};
use crate::utils::error::Result;

const MILLIS_PER_MONTH: i64 = 30 * MILLIS_PER_DAY;
const MILLIS_PER_YEAR: i64 = 12 * MILLIS_PER_MONTH;

/// Split the raw millisecond gap using 30-day months and 360-day years.
///
/// Cheaper than [`calendar_diff`](crate::core::diff::calendar_diff) but drifts
/// by several days per year; `apply` does not invert it.
pub fn approximate_diff(start: &Instant, end: &Instant) -> Result<CalendarDuration> {
    approximate_diff_with(start, end, OrderPolicy::Reject)
}

pub fn approximate_diff_with(
    start: &Instant,
    end: &Instant,
    policy: OrderPolicy,
) -> Result<CalendarDuration> {
    resolve_order(start, end, policy, forward_approximate)
}

fn forward_approximate(start: &Instant, end: &Instant) -> CalendarDuration {
    let total = end.epoch_millis() - start.epoch_millis();

    CalendarDuration {
        years: total / MILLIS_PER_YEAR,
        months: total / MILLIS_PER_MONTH % 12,
        days: total / MILLIS_PER_DAY % 30,
        hours: total / MILLIS_PER_HOUR % 24,
        minutes: total / MILLIS_PER_MINUTE % 60,
        seconds: total / MILLIS_PER_SECOND % 60,
        milliseconds: total % MILLIS_PER_SECOND,
    }
}
