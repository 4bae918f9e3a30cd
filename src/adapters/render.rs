use crate::domain::model::{DiffReport, OutputFormat};
use crate::utils::error::Result;

pub fn render(report: &DiffReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

pub fn render_text(report: &DiffReport) -> String {
    format!(
        "{} -> {} ({})\n{}",
        report.start,
        report.end,
        report.mode.as_str(),
        report.duration
    )
}

pub fn render_json(report: &DiffReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
