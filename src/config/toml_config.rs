use crate::domain::instant::Instant;
use crate::domain::model::{DiffMode, OrderPolicy, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DiffError, Result};
use crate::utils::validation::{validate_choice, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub diff: DiffConfig,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiffConfig {
    pub start: Option<String>,
    pub end: Option<String>,
    pub mode: Option<String>,
    pub order: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DiffError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DiffError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TARGET_DATE})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| DiffError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        self.start()?;
        self.end()?;

        if let Some(mode) = &self.diff.mode {
            validate_choice("diff.mode", mode, DiffMode::NAMES)?;
        }
        if let Some(order) = &self.diff.order {
            validate_choice("diff.order", order, OrderPolicy::NAMES)?;
        }
        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_ref()) {
            validate_choice("output.format", format, OutputFormat::NAMES)?;
        }
        if let Some(level) = self.log_level() {
            validate_non_empty_string("logging.level", level)?;
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

fn parse_instant_field(field: &str, value: &Option<String>) -> Result<Option<Instant>> {
    value
        .as_deref()
        .map(|raw| {
            raw.parse::<Instant>()
                .map_err(|e| DiffError::InvalidConfigValueError {
                    field: field.to_string(),
                    value: raw.to_string(),
                    reason: e.to_string(),
                })
        })
        .transpose()
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl ConfigProvider for TomlConfig {
    fn start(&self) -> Result<Option<Instant>> {
        parse_instant_field("diff.start", &self.diff.start)
    }

    fn end(&self) -> Result<Option<Instant>> {
        parse_instant_field("diff.end", &self.diff.end)
    }

    fn mode(&self) -> DiffMode {
        self.diff
            .mode
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    fn order_policy(&self) -> OrderPolicy {
        self.diff
            .order
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}
