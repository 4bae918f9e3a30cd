pub mod apply;
pub mod approximate;
pub mod calendar;
pub mod diff;
pub mod engine;

pub use crate::domain::instant::Instant;
pub use crate::domain::model::{CalendarDuration, DiffMode, DiffReport, OrderPolicy, OutputFormat};
pub use crate::domain::ports::{Clock, ConfigProvider};
pub use crate::utils::error::Result;
