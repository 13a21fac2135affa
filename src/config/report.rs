//! Report rendering configuration.

use serde::Deserialize;

use crate::report::{Locale, OutputFormat};

/// Report rendering options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Language of headings and axis labels.
    pub locale: Locale,
    /// Text dashboard or JSON document.
    pub format: OutputFormat,
    pub title: String,
    pub subtitle: String,
    /// Optional byline printed under the subtitle.
    pub author: Option<String>,
    /// RFM rows shown in the text report.
    pub rfm_rows: usize,
    /// Width in characters of the longest chart bar.
    pub bar_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            format: OutputFormat::default(),
            title: "Data Analysis Dashboard".to_string(),
            subtitle: "E-Commerce Public Dataset".to_string(),
            author: None,
            rfm_rows: 5,
            bar_width: 40,
        }
    }
}
