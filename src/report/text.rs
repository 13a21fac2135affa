//! Plain-text dashboard: tables and horizontal bar charts.

use std::fmt;

use super::Labels;
use crate::config::ReportConfig;
use crate::ingest::Table;
use crate::metrics::{most_common, LabelCount};
use crate::pipeline::SalesReport;

const BAR: char = '█';
const HIGHLIGHT: char = '▶';
const MISSING_CELL: &str = "-";

/// One bar of a horizontal bar chart.
struct Bar {
    label: String,
    value: f64,
    shown: String,
    highlight: bool,
}

impl Bar {
    fn count(entry: &LabelCount) -> Self {
        Self {
            label: entry.label.clone(),
            value: entry.count as f64,
            shown: entry.count.to_string(),
            highlight: false,
        }
    }

    fn amount(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            shown: format!("{:.2}", value),
            highlight: false,
        }
    }
}

/// Text rendering of a [`SalesReport`].
pub struct TextReport<'a> {
    report: &'a SalesReport,
    config: &'a ReportConfig,
    labels: &'static Labels,
}

impl<'a> TextReport<'a> {
    pub fn new(report: &'a SalesReport, config: &'a ReportConfig) -> Self {
        Self {
            report,
            config,
            labels: config.locale.labels(),
        }
    }

    fn heading(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", text)?;
        writeln!(f, "{}", "-".repeat(text.chars().count()))
    }

    fn axes(f: &mut fmt::Formatter<'_>, category: &str, value: &str) -> fmt::Result {
        writeln!(f, "{} / {}", category, value)
    }

    fn bars(&self, f: &mut fmt::Formatter<'_>, bars: &[Bar]) -> fmt::Result {
        if bars.is_empty() {
            return writeln!(f, "  {}", self.labels.no_data);
        }

        let label_width = bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0);
        let max = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);

        for bar in bars {
            let len = if max > 0.0 {
                ((bar.value / max) * self.config.bar_width as f64).round() as usize
            } else {
                0
            };
            let marker = if bar.highlight { HIGHLIGHT } else { ' ' };
            writeln!(
                f,
                "{} {:<width$} |{} {}",
                marker,
                bar.label,
                BAR.to_string().repeat(len),
                bar.shown,
                width = label_width
            )?;
        }
        Ok(())
    }

    fn table(f: &mut fmt::Formatter<'_>, headers: &[String], rows: &[Vec<String>]) -> fmt::Result {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (idx, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(idx) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        Self::row(f, headers, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        Self::row(f, &rule, &widths)?;
        for row in rows {
            Self::row(f, row, &widths)?;
        }
        Ok(())
    }

    fn row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        writeln!(f, "  {}", padded.join("  ").trim_end())
    }

    fn preview(&self, f: &mut fmt::Formatter<'_>, preview: &Table) -> fmt::Result {
        Self::heading(f, self.labels.sample_heading)?;
        let rows: Vec<Vec<String>> = preview
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_deref().unwrap_or(MISSING_CELL).to_string())
                    .collect()
            })
            .collect();
        Self::table(f, preview.columns(), &rows)
    }

    fn missing_values(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::heading(f, self.labels.missing_heading)?;
        let headers = [
            self.labels.column.to_string(),
            self.labels.missing.to_string(),
        ];
        for summary in &self.report.ingestion {
            writeln!(
                f,
                "{} ({} {})",
                summary.table,
                summary.rows_dropped + summary.rows_unparseable,
                self.labels.rows_dropped
            )?;
            let rows: Vec<Vec<String>> = summary
                .missing
                .columns
                .iter()
                .map(|c| vec![c.column.clone(), c.missing.to_string()])
                .collect();
            Self::table(f, &headers, &rows)?;
        }
        Ok(())
    }

    fn status(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::heading(f, self.labels.status_heading)?;
        Self::axes(f, self.labels.status_axis, self.labels.order_count_axis)?;
        let bars: Vec<Bar> = self
            .report
            .status_distribution
            .iter()
            .map(Bar::count)
            .collect();
        self.bars(f, &bars)
    }

    fn categories(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::heading(f, self.labels.category_heading)?;
        Self::axes(f, self.labels.category_axis, self.labels.average_axis)?;
        let bars: Vec<Bar> = self
            .report
            .category_averages
            .iter()
            .map(|c| Bar::amount(c.category.as_str(), c.average))
            .collect();
        self.bars(f, &bars)
    }

    fn revenue(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::heading(f, self.labels.revenue_heading)?;
        Self::axes(f, self.labels.date_axis, self.labels.revenue_axis)?;
        let bars: Vec<Bar> = self
            .report
            .monthly_revenue
            .iter()
            .map(|m| Bar::amount(m.month.to_string(), m.revenue))
            .collect();
        self.bars(f, &bars)
    }

    fn payments(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::heading(f, self.labels.payment_heading)?;
        Self::axes(f, self.labels.payment_axis, self.labels.payment_count_axis)?;
        let top = most_common(&self.report.payment_methods).map(|c| c.label.as_str());
        let bars: Vec<Bar> = self
            .report
            .payment_methods
            .iter()
            .map(|entry| Bar {
                highlight: Some(entry.label.as_str()) == top,
                ..Bar::count(entry)
            })
            .collect();
        self.bars(f, &bars)?;
        if let Some(top) = top {
            writeln!(f, "{} {}: {}", HIGHLIGHT, self.labels.most_common, top)?;
        }
        Ok(())
    }

    fn rfm(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::heading(f, self.labels.rfm_heading)?;
        let headers = [
            self.labels.customer.to_string(),
            self.labels.recency.to_string(),
            self.labels.frequency.to_string(),
            self.labels.monetary.to_string(),
        ];
        let rows: Vec<Vec<String>> = self
            .report
            .rfm
            .iter()
            .take(self.config.rfm_rows)
            .map(|r| {
                vec![
                    r.customer_id.clone(),
                    r.recency_days
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| MISSING_CELL.to_string()),
                    r.frequency.to_string(),
                    format!("{:.2}", r.monetary),
                ]
            })
            .collect();
        Self::table(f, &headers, &rows)
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.config.title)?;
        writeln!(f, "{}", "=".repeat(self.config.title.chars().count()))?;
        writeln!(f, "{}", self.config.subtitle)?;
        if let Some(author) = &self.config.author {
            writeln!(f, "{}", author)?;
        }

        self.preview(f, &self.report.orders_preview)?;
        self.missing_values(f)?;
        self.status(f)?;
        self.categories(f)?;
        self.revenue(f)?;
        self.payments(f)?;
        self.rfm(f)
    }
}
