use crate::domain::instant::Instant;
use crate::domain::model::{DiffMode, OrderPolicy, OutputFormat};
use crate::utils::error::Result;

/// Source of "now" for requests that omit a start instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub trait ConfigProvider: Send + Sync {
    /// `Ok(None)` when absent; a present but malformed value is an error.
    fn start(&self) -> Result<Option<Instant>>;
    fn end(&self) -> Result<Option<Instant>>;
    fn mode(&self) -> DiffMode;
    fn order_policy(&self) -> OrderPolicy;
    fn output_format(&self) -> OutputFormat;
}
