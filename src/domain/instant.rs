use crate::core::calendar::{self, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use crate::utils::error::{DiffError, Result};
use crate::utils::validation::validate_field_range;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Range chrono can represent; keeps every `Instant` convertible both ways.
const MIN_YEAR: i32 = -262_144;
const MAX_YEAR: i32 = 262_143;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A naive calendar timestamp with millisecond precision.
///
/// Field order doubles as chronological order, so the derived `Ord` compares
/// instants by time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
}

impl Instant {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self> {
        validate_field_range("year", year, MIN_YEAR, MAX_YEAR)?;
        validate_field_range("month", month, 1, 12)?;
        validate_field_range("day", day, 1, calendar::days_in_month(year, month))?;
        validate_field_range("hour", hour, 0, 23)?;
        validate_field_range("minute", minute, 0, 59)?;
        validate_field_range("second", second, 0, 59)?;
        validate_field_range("millisecond", millisecond, 0, 999)?;

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
        })
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::new(year, month, day, 0, 0, 0, 0)
    }

    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        Self::new(year, month, day, hour, minute, second, 0)
    }

    /// Build an instant from days since 1970-01-01 and milliseconds into that day.
    pub(crate) fn from_parts(day_number: i64, millis_of_day: i64) -> Result<Self> {
        let days = day_number + millis_of_day.div_euclid(MILLIS_PER_DAY);
        let ms = millis_of_day.rem_euclid(MILLIS_PER_DAY);
        let (year, month, day) = calendar::from_day_number(days);
        Self::new(
            year,
            month,
            day,
            (ms / MILLIS_PER_HOUR) as u32,
            (ms % MILLIS_PER_HOUR / MILLIS_PER_MINUTE) as u32,
            (ms % MILLIS_PER_MINUTE / MILLIS_PER_SECOND) as u32,
            (ms % MILLIS_PER_SECOND) as u32,
        )
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn millisecond(&self) -> u32 {
        self.millisecond
    }

    /// Days since 1970-01-01.
    pub fn day_number(&self) -> i64 {
        calendar::day_number(self.year, self.month, self.day)
    }

    pub fn millis_of_day(&self) -> i64 {
        self.hour as i64 * MILLIS_PER_HOUR
            + self.minute as i64 * MILLIS_PER_MINUTE
            + self.second as i64 * MILLIS_PER_SECOND
            + self.millisecond as i64
    }

    /// Milliseconds since 1970-01-01T00:00:00.000 on the same naive clock.
    pub fn epoch_millis(&self) -> i64 {
        self.day_number() * MILLIS_PER_DAY + self.millis_of_day()
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(value: NaiveDateTime) -> Self {
        Self {
            year: value.year(),
            month: value.month(),
            day: value.day(),
            hour: value.hour(),
            minute: value.minute(),
            second: value.second(),
            // 閏秒的 nanosecond 會超過 1e9，截到 999
            millisecond: (value.nanosecond() / 1_000_000).min(999),
        }
    }
}

impl FromStr for Instant {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();

        for format in DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(naive.into());
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            return Ok(date.and_time(chrono::NaiveTime::MIN).into());
        }

        // 帶時區的 RFC 3339：保留牆上時間，捨棄 offset
        match chrono::DateTime::parse_from_rfc3339(input) {
            Ok(dt) => Ok(dt.naive_local().into()),
            Err(e) => Err(DiffError::ParseError {
                input: s.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}

impl Serialize for Instant {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_fields() {
        assert!(Instant::from_ymd(2025, 13, 1).is_err());
        assert!(Instant::from_ymd(2025, 2, 29).is_err());
        assert!(Instant::from_ymd(2024, 2, 29).is_ok());
        assert!(Instant::new(2025, 1, 1, 24, 0, 0, 0).is_err());
        assert!(Instant::new(2025, 1, 1, 0, 0, 0, 1000).is_err());

        match Instant::from_ymd(2025, 1, 32) {
            Err(DiffError::InvalidField { field, value, .. }) => {
                assert_eq!(field, "day");
                assert_eq!(value, "32");
            }
            other => panic!("expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_formats() {
        let date: Instant = "2026-03-04".parse().unwrap();
        assert_eq!(date, Instant::from_ymd(2026, 3, 4).unwrap());

        let full: Instant = "2025-03-04T10:20:30.456".parse().unwrap();
        assert_eq!(full, Instant::new(2025, 3, 4, 10, 20, 30, 456).unwrap());

        let spaced: Instant = "2025-03-04 10:20:30".parse().unwrap();
        assert_eq!(spaced, Instant::from_ymd_hms(2025, 3, 4, 10, 20, 30).unwrap());

        let minutes: Instant = "2025-03-04T10:20".parse().unwrap();
        assert_eq!(minutes, Instant::from_ymd_hms(2025, 3, 4, 10, 20, 0).unwrap());

        let zoned: Instant = "2025-03-04T10:20:30+08:00".parse().unwrap();
        assert_eq!(zoned, Instant::from_ymd_hms(2025, 3, 4, 10, 20, 30).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "next tuesday".parse::<Instant>(),
            Err(DiffError::ParseError { .. })
        ));
        assert!("2025-02-30".parse::<Instant>().is_err());
    }

    #[test]
    fn test_display_and_serde() {
        let instant = Instant::new(2025, 3, 4, 5, 6, 7, 8).unwrap();
        assert_eq!(instant.to_string(), "2025-03-04T05:06:07.008");

        let json = serde_json::to_string(&instant).unwrap();
        assert_eq!(json, "\"2025-03-04T05:06:07.008\"");
        let back: Instant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, instant);
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = Instant::new(2025, 12, 31, 23, 59, 59, 999).unwrap();
        let b = Instant::from_ymd(2026, 1, 1).unwrap();
        assert!(a < b);
        assert!(a.epoch_millis() + 1 == b.epoch_millis());
    }

    #[test]
    fn test_from_parts_carries_days() {
        let day = calendar::day_number(2025, 2, 28);
        let instant = Instant::from_parts(day, MILLIS_PER_DAY + 1).unwrap();
        assert_eq!(instant, Instant::new(2025, 3, 1, 0, 0, 0, 1).unwrap());

        let before = Instant::from_parts(day, -1).unwrap();
        assert_eq!(before, Instant::new(2025, 2, 27, 23, 59, 59, 999).unwrap());
    }
}
