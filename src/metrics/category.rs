//! Average order value by product category.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::join::JoinedRow;

/// Mean item price within one product category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAverage {
    pub category: String,
    pub average: f64,
    /// Joined rows that contributed to the mean.
    pub rows: usize,
}

/// Mean price per category, ascending by mean.
///
/// Groups are formed in category-name order and the sort is stable, so
/// categories with equal means stay in name order.
pub fn average_order_value_by_category(rows: &[JoinedRow]) -> Vec<CategoryAverage> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let (sum, count) = groups.entry(row.category.as_str()).or_default();
        *sum += row.price;
        *count += 1;
    }

    let mut averages: Vec<CategoryAverage> = groups
        .into_iter()
        .map(|(category, (sum, count))| CategoryAverage {
            category: category.to_string(),
            average: sum / count as f64,
            rows: count,
        })
        .collect();
    averages.sort_by(|a, b| a.average.total_cmp(&b.average));

    debug!(categories = averages.len(), "Computed category averages");
    averages
}
