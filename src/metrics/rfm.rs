//! Recency, frequency, monetary summary per customer.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::dataset::Order;
use crate::join::JoinedRow;

/// RFM values for one customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RfmRecord {
    pub customer_id: String,
    /// Whole days between the customer's latest approved order and the
    /// latest approved order in the dataset. `None` if the customer has
    /// no dated order.
    pub recency_days: Option<i64>,
    /// Orders placed by the customer.
    pub frequency: usize,
    /// Sum of item prices over the customer's joined rows. Zero when no
    /// item of theirs survived the join.
    pub monetary: f64,
}

#[derive(Default)]
struct Accumulator {
    recency_days: Option<i64>,
    frequency: usize,
    monetary: f64,
    joined_rows: usize,
}

/// Build one RFM record per distinct customer in `orders`, sorted by
/// customer id.
pub fn rfm_summary(orders: &[Order], rows: &[JoinedRow]) -> Vec<RfmRecord> {
    let latest = orders.iter().filter_map(|o| o.approved_at).max();

    let mut customers: BTreeMap<&str, Accumulator> = BTreeMap::new();
    for order in orders {
        let acc = customers.entry(order.customer_id.as_str()).or_default();
        acc.frequency += 1;

        let recency = latest
            .zip(order.approved_at)
            .map(|(latest, approved)| (latest - approved).num_days());
        acc.recency_days = match (acc.recency_days, recency) {
            (Some(current), Some(days)) => Some(current.min(days)),
            (current, days) => current.or(days),
        };
    }

    for row in rows {
        if let Some(acc) = customers.get_mut(row.customer_id.as_str()) {
            acc.monetary += row.price;
            acc.joined_rows += 1;
        }
    }

    let without_items = customers
        .values()
        .filter(|acc| acc.joined_rows == 0)
        .count();
    if without_items > 0 {
        debug!(
            customers = without_items,
            "Customers without joined items, monetary set to zero"
        );
    }

    customers
        .into_iter()
        .map(|(customer_id, acc)| RfmRecord {
            customer_id: customer_id.to_string(),
            recency_days: acc.recency_days,
            frequency: acc.frequency,
            monetary: acc.monetary,
        })
        .collect()
}
