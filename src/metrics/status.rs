//! Order-status distribution.

use tracing::debug;

use super::{tally, LabelCount};
use crate::dataset::Order;

/// Count orders per status, most frequent first.
pub fn status_distribution(orders: &[Order]) -> Vec<LabelCount> {
    let counts = tally(orders.iter().map(|o| o.order_status.as_str()));
    debug!(statuses = counts.len(), "Computed order status distribution");
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join::tests::order;

    #[test]
    fn test_status_distribution_counts() {
        let orders = vec![
            order("o1", "c1", "delivered", "2018-01-01"),
            order("o2", "c2", "delivered", "2018-01-02"),
            order("o3", "c3", "canceled", "2018-01-03"),
        ];

        let distribution = status_distribution(&orders);

        assert_eq!(
            distribution,
            vec![
                LabelCount {
                    label: "delivered".to_string(),
                    count: 2
                },
                LabelCount {
                    label: "canceled".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_status_distribution_keeps_unknown_labels() {
        let orders = vec![order("o1", "c1", "on_hold", "2018-01-01")];
        let distribution = status_distribution(&orders);
        assert_eq!(distribution[0].label, "on_hold");
    }

    #[test]
    fn test_status_distribution_total_matches_orders() {
        let orders: Vec<_> = ["shipped", "delivered", "shipped", "invoiced"]
            .iter()
            .enumerate()
            .map(|(i, s)| order(&format!("o{i}"), "c", s, "2018-01-01"))
            .collect();
        let total: usize = status_distribution(&orders).iter().map(|c| c.count).sum();
        assert_eq!(total, orders.len());
    }
}
