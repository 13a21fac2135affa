//! Presentation of a [`SalesReport`].
//!
//! The pipeline ends at producing the report structures; this module
//! turns them into either a localized text dashboard or a JSON document.

mod labels;
mod text;

pub use labels::{Labels, Locale};
pub use text::TextReport;

use serde::Deserialize;

use crate::config::ReportConfig;
use crate::pipeline::SalesReport;

/// Output format of the rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render the report as a text dashboard.
pub fn render_text(report: &SalesReport, config: &ReportConfig) -> String {
    TextReport::new(report, config).to_string()
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &SalesReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Render the report in the configured format.
pub fn render(report: &SalesReport, config: &ReportConfig) -> serde_json::Result<String> {
    match config.format {
        OutputFormat::Text => Ok(render_text(report, config)),
        OutputFormat::Json => render_json(report),
    }
}
