use crate::utils::error::{DiffError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 日曆欄位的範圍檢查（含上下界）
pub fn validate_field_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DiffError::InvalidField {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 與各選項的 FromStr 一致：忽略前後空白與大小寫
pub fn validate_choice(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    let normalized = value.trim().to_ascii_lowercase();
    if !allowed.contains(&normalized.as_str()) {
        return Err(DiffError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| DiffError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DiffError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_field_range() {
        assert!(validate_field_range("month", 1u32, 1, 12).is_ok());
        assert!(validate_field_range("month", 12u32, 1, 12).is_ok());
        assert!(validate_field_range("month", 13u32, 1, 12).is_err());
        assert!(validate_field_range("month", 0u32, 1, 12).is_err());
    }

    #[test]
    fn test_validate_choice() {
        assert!(validate_choice("output.format", "json", &["text", "json"]).is_ok());
        assert!(validate_choice("output.format", " JSON ", &["text", "json"]).is_ok());
        assert!(validate_choice("output.format", "xml", &["text", "json"]).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("2026-03-04".to_string());
        let missing: Option<String> = None;
        assert!(validate_required_field("end", &present).is_ok());
        assert!(matches!(
            validate_required_field("end", &missing),
            Err(DiffError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("logging.level", "debug").is_ok());
        assert!(validate_non_empty_string("logging.level", "   ").is_err());
    }
}
