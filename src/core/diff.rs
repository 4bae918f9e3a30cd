use crate::core::apply::anchor_day_number;
use crate::core::calendar::{
    days_in_previous_month, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND,
};
use crate::domain::instant::Instant;
use crate::domain::model::{CalendarDuration, OrderPolicy};
use crate::utils::error::{DiffError, Result};

/// Calendar difference from `start` to `end`, rejecting a reversed interval.
pub fn calendar_diff(start: &Instant, end: &Instant) -> Result<CalendarDuration> {
    calendar_diff_with(start, end, OrderPolicy::Reject)
}

pub fn calendar_diff_with(
    start: &Instant,
    end: &Instant,
    policy: OrderPolicy,
) -> Result<CalendarDuration> {
    if end < start && policy == OrderPolicy::Negate {
        return Ok(backward_diff(start, end));
    }
    resolve_order(start, end, policy, forward_diff)
}

/// Run `diff` on an ordered pair according to `policy`.
pub(crate) fn resolve_order<F>(
    start: &Instant,
    end: &Instant,
    policy: OrderPolicy,
    diff: F,
) -> Result<CalendarDuration>
where
    F: Fn(&Instant, &Instant) -> CalendarDuration,
{
    if end >= start {
        return Ok(diff(start, end));
    }

    match policy {
        OrderPolicy::Reject => Err(DiffError::InvalidOrder {
            start: start.to_string(),
            end: end.to_string(),
        }),
        OrderPolicy::Swap => Ok(diff(end, start)),
        OrderPolicy::Negate => Ok(diff(end, start).negated()),
    }
}

/// Non-positive duration that `apply` maps from `start` back to `end`.
/// Requires `end < start`.
///
/// Months are stepped back as far as possible without the rolled anchor
/// passing `end`; the rest is an exact negative day/clock remainder.
fn backward_diff(start: &Instant, end: &Instant) -> CalendarDuration {
    let anchor_millis =
        |months: i64| anchor_day_number(start, months) * MILLIS_PER_DAY + start.millis_of_day();
    let target = end.epoch_millis();

    // 從正向差值的月數出發，最多修正一兩步
    let mut total_months = -forward_diff(end, start).total_months();
    while anchor_millis(total_months - 1) >= target {
        total_months -= 1;
    }
    while total_months < 0 && anchor_millis(total_months) < target {
        total_months += 1;
    }

    // rest <= 0; 整數除法向零截斷，所以每個欄位都 <= 0
    let rest = target - anchor_millis(total_months);
    CalendarDuration {
        years: total_months / 12,
        months: total_months % 12,
        days: rest / MILLIS_PER_DAY,
        hours: rest % MILLIS_PER_DAY / MILLIS_PER_HOUR,
        minutes: rest % MILLIS_PER_HOUR / MILLIS_PER_MINUTE,
        seconds: rest % MILLIS_PER_MINUTE / MILLIS_PER_SECOND,
        milliseconds: rest % MILLIS_PER_SECOND,
    }
}

/// Field-wise subtraction with cascading borrow. Requires `start <= end`.
fn forward_diff(start: &Instant, end: &Instant) -> CalendarDuration {
    let mut years = end.year() as i64 - start.year() as i64;
    let mut months = end.month() as i64 - start.month() as i64;
    let mut days = end.day() as i64 - start.day() as i64;
    let mut hours = end.hour() as i64 - start.hour() as i64;
    let mut minutes = end.minute() as i64 - start.minute() as i64;
    let mut seconds = end.second() as i64 - start.second() as i64;
    let mut milliseconds = end.millisecond() as i64 - start.millisecond() as i64;

    if milliseconds < 0 {
        milliseconds += 1000;
        seconds -= 1;
    }
    if seconds < 0 {
        seconds += 60;
        minutes -= 1;
    }
    if minutes < 0 {
        minutes += 60;
        hours -= 1;
    }
    let mut day_borrow = 0;
    if hours < 0 {
        hours += 24;
        days -= 1;
        day_borrow = 1;
    }
    // 借位用的是 end 前一個月的天數（end 月份的 day 0）
    if days < 0 {
        days += days_in_previous_month(end.year(), end.month()) as i64;
        months -= 1;
    }
    if months < 0 {
        months += 12;
        years -= 1;
    }

    // 前一個月太短、補不回來（例如 01-31 → 03-01）：再借一個月，
    // 從重新定位的日期精確計算天數
    if days < 0 {
        months -= 1;
        if months < 0 {
            months += 12;
            years -= 1;
        }
        let anchor = anchor_day_number(start, years * 12 + months);
        days = end.day_number() - day_borrow - anchor;
    }

    CalendarDuration {
        years,
        months,
        days,
        hours,
        minutes,
        seconds,
        milliseconds,
    }
}
