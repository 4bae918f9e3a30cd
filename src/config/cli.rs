use crate::config::toml_config::TomlConfig;
use crate::domain::instant::Instant;
use crate::domain::model::{DiffMode, OrderPolicy, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "calendar-diff")]
#[command(about = "Calendar-accurate difference between two instants")]
pub struct CliConfig {
    /// Start instant (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS[.fff]); defaults to now
    #[arg(long)]
    pub start: Option<Instant>,

    /// End instant
    #[arg(long)]
    pub end: Option<Instant>,

    #[arg(long, value_enum)]
    pub mode: Option<DiffMode>,

    /// What to do when --end precedes --start
    #[arg(long, value_enum)]
    pub order: Option<OrderPolicy>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 命令列參數優先，缺少的欄位由設定檔補上
    pub fn merged_with(mut self, file: &TomlConfig) -> Result<Self> {
        if self.start.is_none() {
            self.start = file.start()?;
        }
        if self.end.is_none() {
            self.end = file.end()?;
        }
        self.mode = self.mode.or_else(|| file.diff.mode.as_ref().map(|_| file.mode()));
        self.order = self
            .order
            .or_else(|| file.diff.order.as_ref().map(|_| file.order_policy()));
        self.format = self.format.or_else(|| {
            file.output
                .as_ref()
                .and_then(|o| o.format.as_ref())
                .map(|_| file.output_format())
        });
        Ok(self)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_required_field("end", &self.end)?;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn start(&self) -> Result<Option<Instant>> {
        Ok(self.start)
    }

    fn end(&self) -> Result<Option<Instant>> {
        Ok(self.end)
    }

    fn mode(&self) -> DiffMode {
        self.mode.unwrap_or_default()
    }

    fn order_policy(&self) -> OrderPolicy {
        self.order.unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let config = CliConfig::try_parse_from([
            "calendar-diff",
            "--start",
            "2025-01-31",
            "--end",
            "2025-03-01T08:30:00",
            "--order",
            "negate",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(config.start, Some(Instant::from_ymd(2025, 1, 31).unwrap()));
        assert_eq!(config.end, Some(Instant::from_ymd_hms(2025, 3, 1, 8, 30, 0).unwrap()));
        assert_eq!(config.order_policy(), OrderPolicy::Negate);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.mode(), DiffMode::Calendar);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_instant_is_rejected_by_clap() {
        assert!(CliConfig::try_parse_from(["calendar-diff", "--end", "2025-13-01"]).is_err());
    }

    #[test]
    fn test_missing_end_fails_validation() {
        let config = CliConfig::try_parse_from(["calendar-diff"]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = TomlConfig::from_toml_str(
            "[diff]\nstart = \"2020-01-01\"\nend = \"2026-03-04\"\nmode = \"approximate\"\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();
        let cli = CliConfig::try_parse_from(["calendar-diff", "--end", "2027-01-01", "--format", "text"])
            .unwrap()
            .merged_with(&file)
            .unwrap();

        assert_eq!(cli.start, Some(Instant::from_ymd(2020, 1, 1).unwrap()));
        assert_eq!(cli.end, Some(Instant::from_ymd(2027, 1, 1).unwrap()));
        assert_eq!(cli.mode(), DiffMode::Approximate);
        assert_eq!(cli.output_format(), OutputFormat::Text);
        assert_eq!(cli.order, None);
    }
}
