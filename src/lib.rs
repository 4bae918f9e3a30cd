pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::clock::{FixedClock, SystemClock};
pub use crate::core::apply::apply;
pub use crate::core::approximate::{approximate_diff, approximate_diff_with};
pub use crate::core::diff::{calendar_diff, calendar_diff_with};
pub use crate::core::engine::DiffEngine;
pub use crate::core::{CalendarDuration, Clock, ConfigProvider, DiffMode, DiffReport, Instant, OrderPolicy, OutputFormat};
pub use utils::error::{DiffError, Result};
