//! Dashboard metrics computed from the cleaned and joined datasets.
//!
//! Each metric is a pure function over borrowed records and returns an
//! owned, serializable result for the report layer.

pub mod category;
pub mod payment;
pub mod revenue;
pub mod rfm;
pub mod status;

pub use category::{average_order_value_by_category, CategoryAverage};
pub use payment::{most_common, payment_method_frequency};
pub use revenue::{monthly_revenue, Month, MonthlyRevenue};
pub use rfm::{rfm_summary, RfmRecord};
pub use status::status_distribution;

use std::collections::BTreeMap;

use serde::Serialize;

/// Number of records carrying a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Count occurrences of each label.
///
/// Sorted by descending count; equal counts are ordered by label.
pub(crate) fn tally<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<LabelCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }

    let mut tallied: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount {
            label: label.to_string(),
            count,
        })
        .collect();
    tallied.sort_by(|a, b| b.count.cmp(&a.count));
    tallied
}
