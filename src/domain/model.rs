use crate::domain::instant::Instant;
use crate::utils::error::{DiffError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A duration split into independent calendar and clock units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDuration {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
}

impl CalendarDuration {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    pub fn negated(self) -> Self {
        Self {
            years: -self.years,
            months: -self.months,
            days: -self.days,
            hours: -self.hours,
            minutes: -self.minutes,
            seconds: -self.seconds,
            milliseconds: -self.milliseconds,
        }
    }

    /// Years and months folded into a single month count.
    pub fn total_months(&self) -> i64 {
        self.years * 12 + self.months
    }
}

impl fmt::Display for CalendarDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "years : {},months : {},days : {},hours : {},minutes : {},seconds : {},milliseconds : {}",
            self.years, self.months, self.days, self.hours, self.minutes, self.seconds, self.milliseconds
        )
    }
}

/// A computed difference together with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    pub start: Instant,
    pub end: Instant,
    pub mode: DiffMode,
    pub duration: CalendarDuration,
}

/// What to do when the end instant precedes the start instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OrderPolicy {
    #[default]
    Reject,
    /// Magnitude of the reversed interval.
    Swap,
    /// Non-positive fields; in calendar mode `apply(start, d)` returns `end`.
    /// Approximate mode only flips the sign.
    Negate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// Borrow across real month lengths.
    #[default]
    Calendar,
    /// 30-day months and 360-day years over the raw millisecond gap.
    Approximate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

macro_rules! impl_choice {
    ($ty:ident, $field:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const NAMES: &'static [&'static str] = &[$($name),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl FromStr for $ty {
            type Err = DiffError;

            fn from_str(s: &str) -> Result<Self> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(DiffError::InvalidConfigValueError {
                        field: $field.to_string(),
                        value: s.to_string(),
                        reason: format!("Valid values: {}", Self::NAMES.join(", ")),
                    }),
                }
            }
        }
    };
}

impl_choice!(OrderPolicy, "diff.order", { Reject => "reject", Swap => "swap", Negate => "negate" });
impl_choice!(DiffMode, "diff.mode", { Calendar => "calendar", Approximate => "approximate" });
impl_choice!(OutputFormat, "output.format", { Text => "text", Json => "json" });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_console_layout() {
        let d = CalendarDuration {
            years: 1,
            months: 2,
            days: 3,
            hours: 4,
            minutes: 5,
            seconds: 6,
            milliseconds: 7,
        };
        assert_eq!(
            d.to_string(),
            "years : 1,months : 2,days : 3,hours : 4,minutes : 5,seconds : 6,milliseconds : 7"
        );
        assert_eq!(d.total_months(), 14);
    }

    #[test]
    fn test_negated() {
        let d = CalendarDuration {
            years: 1,
            days: 2,
            ..Default::default()
        };
        let n = d.negated();
        assert_eq!(n.years, -1);
        assert_eq!(n.days, -2);
        assert_eq!(n.negated(), d);
        assert!(CalendarDuration::zero().is_zero());
    }

    #[test]
    fn test_choices_parse() {
        assert_eq!("SWAP".parse::<OrderPolicy>().unwrap(), OrderPolicy::Swap);
        assert_eq!("approximate".parse::<DiffMode>().unwrap(), DiffMode::Approximate);
        assert_eq!(OutputFormat::Json.as_str(), "json");
        assert!("sideways".parse::<OrderPolicy>().is_err());
    }
}
