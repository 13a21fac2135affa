//! The sales metrics pipeline: load, clean, join, aggregate.

use serde::Serialize;
use tracing::info;

use crate::config::DataConfig;
use crate::ingest::{self, Datasets, Table, TableSummary};
use crate::join::join;
use crate::metrics::{
    average_order_value_by_category, monthly_revenue, payment_method_frequency, rfm_summary,
    status_distribution, CategoryAverage, LabelCount, MonthlyRevenue, RfmRecord,
};

/// Everything the dashboard shows, produced by one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct SalesReport {
    /// Per-source ingestion summaries, in load order.
    pub ingestion: Vec<TableSummary>,
    /// Leading rows of the orders source, before cleaning.
    pub orders_preview: Table,
    /// Rows that survived the item/product/order join.
    pub joined_rows: usize,
    pub status_distribution: Vec<LabelCount>,
    pub category_averages: Vec<CategoryAverage>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub payment_methods: Vec<LabelCount>,
    pub rfm: Vec<RfmRecord>,
}

/// Compute every metric from cleaned datasets.
pub fn analyze(datasets: Datasets) -> SalesReport {
    let Datasets {
        orders,
        items,
        payments,
        products,
        summaries,
        orders_preview,
    } = datasets;

    let status_distribution = status_distribution(&orders);
    let joined = join(&items, &products, &orders);
    let category_averages = average_order_value_by_category(&joined);
    let monthly_revenue = monthly_revenue(&joined);
    let payment_methods = payment_method_frequency(&payments);
    let rfm = rfm_summary(&orders, &joined);

    info!(
        joined_rows = joined.len(),
        statuses = status_distribution.len(),
        categories = category_averages.len(),
        months = monthly_revenue.len(),
        payment_methods = payment_methods.len(),
        customers = rfm.len(),
        "Sales metrics computed"
    );

    SalesReport {
        ingestion: summaries,
        orders_preview,
        joined_rows: joined.len(),
        status_distribution,
        category_averages,
        monthly_revenue,
        payment_methods,
        rfm,
    }
}

/// Load the configured sources and compute the report.
pub fn run(config: &DataConfig) -> ingest::Result<SalesReport> {
    info!(dir = %config.dir.display(), "Running sales metrics pipeline");
    let datasets = ingest::load_datasets(config)?;
    Ok(analyze(datasets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join::tests::{item, order, product};

    fn datasets() -> Datasets {
        Datasets {
            orders: vec![
                order("o1", "c1", "delivered", "2018-01-15 10:00:00"),
                order("o2", "c1", "delivered", "2018-02-20 10:00:00"),
                order("o3", "c2", "canceled", "2018-02-21 10:00:00"),
            ],
            items: vec![
                item("o1", 1, "p1", 10.0),
                item("o2", 1, "p2", 20.0),
                item("o3", 1, "p-unknown", 5.0),
            ],
            payments: Vec::new(),
            products: vec![product("p1", "toys"), product("p2", "books")],
            summaries: Vec::new(),
            orders_preview: Table::new("orders", Vec::new(), Vec::new()),
        }
    }

    #[test]
    fn test_analyze_wires_every_metric() {
        let report = analyze(datasets());

        assert_eq!(report.joined_rows, 2);
        assert_eq!(report.status_distribution[0].label, "delivered");
        assert_eq!(report.status_distribution[0].count, 2);
        assert_eq!(report.category_averages.len(), 2);
        assert_eq!(report.monthly_revenue.len(), 2);
        assert!(report.payment_methods.is_empty());
        assert_eq!(report.rfm.len(), 2);
        assert_eq!(report.rfm[0].frequency, 2);
        assert_eq!(report.rfm[1].monetary, 0.0);
    }

    #[test]
    fn test_run_missing_directory_fails() {
        let config = DataConfig::in_dir("/nonexistent/sales-metrics");
        assert!(run(&config).is_err());
    }
}
