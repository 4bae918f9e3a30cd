use crate::core::calendar::{self, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use crate::domain::instant::Instant;
use crate::domain::model::CalendarDuration;
use crate::utils::error::{DiffError, Result};

// Spans wider than the representable calendar are rejected up front so the
// arithmetic below cannot overflow.
const MAX_MONTHS: i64 = 12 * 600_000;
const MAX_DAYS: i64 = 366 * 600_000;
const MAX_CLOCK_UNITS: i64 = 1 << 50;

/// Day number of `start`'s day-of-month after moving `months` months.
///
/// A day past the end of the target month rolls forward into the next one,
/// so 2025-01-31 plus one month lands on 2025-03-03.
pub(crate) fn anchor_day_number(start: &Instant, months: i64) -> i64 {
    let (year, month) = calendar::add_months(start.year(), start.month(), months);
    calendar::day_number(year, month, 1) + start.day() as i64 - 1
}

fn ensure_within(field: &str, value: i64, limit: i64) -> Result<()> {
    if value.unsigned_abs() > limit as u64 {
        return Err(DiffError::InvalidField {
            field: field.to_string(),
            value: value.to_string(),
            reason: "exceeds the representable calendar range".to_string(),
        });
    }
    Ok(())
}

/// Apply `duration` to `start`: years and months together, then days, then
/// the clock fields with carry into days.
pub fn apply(start: &Instant, duration: &CalendarDuration) -> Result<Instant> {
    ensure_within("years", duration.years, MAX_MONTHS / 12)?;
    ensure_within("months", duration.months, MAX_MONTHS)?;
    ensure_within("days", duration.days, MAX_DAYS)?;
    ensure_within("hours", duration.hours, MAX_CLOCK_UNITS / MILLIS_PER_HOUR)?;
    ensure_within("minutes", duration.minutes, MAX_CLOCK_UNITS / MILLIS_PER_MINUTE)?;
    ensure_within("seconds", duration.seconds, MAX_CLOCK_UNITS / MILLIS_PER_SECOND)?;
    ensure_within("milliseconds", duration.milliseconds, MAX_CLOCK_UNITS)?;

    let day = anchor_day_number(start, duration.total_months()) + duration.days;
    let millis = start.millis_of_day()
        + duration.hours * MILLIS_PER_HOUR
        + duration.minutes * MILLIS_PER_MINUTE
        + duration.seconds * MILLIS_PER_SECOND
        + duration.milliseconds;

    Instant::from_parts(day, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> Instant {
        s.parse().unwrap()
    }

    #[test]
    fn test_month_overflow_rolls_forward() {
        let d = CalendarDuration {
            months: 1,
            ..Default::default()
        };
        assert_eq!(apply(&at("2025-01-31"), &d).unwrap(), at("2025-03-03"));
        assert_eq!(apply(&at("2024-01-30"), &d).unwrap(), at("2024-03-01"));
        assert_eq!(apply(&at("2024-01-15"), &d).unwrap(), at("2024-02-15"));
    }

    #[test]
    fn test_years_and_months_move_together() {
        let d = CalendarDuration {
            years: 1,
            months: 1,
            days: 2,
            ..Default::default()
        };
        assert_eq!(apply(&at("2024-02-29"), &d).unwrap(), at("2025-03-31"));
    }

    #[test]
    fn test_clock_fields_carry_into_days() {
        let d = CalendarDuration {
            hours: 23,
            minutes: 59,
            seconds: 59,
            milliseconds: 1001,
            ..Default::default()
        };
        assert_eq!(apply(&at("2025-12-31T00:00:00"), &d).unwrap(), at("2026-01-01T00:00:00.001"));
    }

    #[test]
    fn test_negative_fields() {
        let d = CalendarDuration {
            months: -1,
            days: -1,
            milliseconds: -1,
            ..Default::default()
        };
        assert_eq!(apply(&at("2025-03-01"), &d).unwrap(), at("2025-01-30T23:59:59.999"));
    }

    #[test]
    fn test_out_of_range_duration_is_rejected() {
        let d = CalendarDuration {
            years: i64::MAX,
            ..Default::default()
        };
        assert!(matches!(
            apply(&at("2025-01-01"), &d),
            Err(DiffError::InvalidField { .. })
        ));
    }
}
