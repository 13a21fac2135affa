//! Acceptance tests for the sales metrics pipeline.
//!
//! Scenarios build the source tables from Gherkin data tables, run them
//! through cleaning and the metric stages, and check the report.
//! Run with: cargo test --test acceptance

use cucumber::{gherkin::Step, given, then, when, World};

use sales_metrics::dataset::{Order, OrderItem, Payment, Product, Record};
use sales_metrics::ingest::{clean_table, drop_undated_orders, Datasets, Table};
use sales_metrics::metrics::{most_common, RfmRecord};
use sales_metrics::pipeline::{analyze, SalesReport};

const TOLERANCE: f64 = 1e-9;

#[derive(Debug, Default, World)]
pub struct MetricsWorld {
    orders: Option<Table>,
    items: Option<Table>,
    payments: Option<Table>,
    products: Option<Table>,
    report: Option<SalesReport>,
}

impl MetricsWorld {
    fn report(&self) -> &SalesReport {
        self.report.as_ref().expect("metrics not computed")
    }

    fn customer(&self, customer_id: &str) -> &RfmRecord {
        self.report()
            .rfm
            .iter()
            .find(|r| r.customer_id == customer_id)
            .unwrap_or_else(|| panic!("no RFM row for customer {}", customer_id))
    }
}

/// Turn a step's data table into a raw source table.
fn table_from_step<T: Record>(step: &Step) -> Table {
    let rows = &step.table.as_ref().expect("step requires a data table").rows;
    let csv = rows
        .iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n");
    Table::from_reader(T::TABLE, csv.as_bytes(), b',').expect("data table is valid CSV")
}

fn empty_table<T: Record>() -> Table {
    Table::new(
        T::TABLE,
        T::REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        Vec::new(),
    )
}

fn parse_rows(step: &Step) -> Vec<(String, String)> {
    step.table
        .as_ref()
        .expect("step requires a data table")
        .rows
        .iter()
        .skip(1)
        .map(|row| (row[0].clone(), row[1].clone()))
        .collect()
}

// --- Given steps ---

#[given("orders:")]
fn given_orders(world: &mut MetricsWorld, step: &Step) {
    world.orders = Some(table_from_step::<Order>(step));
}

#[given("order items:")]
fn given_order_items(world: &mut MetricsWorld, step: &Step) {
    world.items = Some(table_from_step::<OrderItem>(step));
}

#[given("payments:")]
fn given_payments(world: &mut MetricsWorld, step: &Step) {
    world.payments = Some(table_from_step::<Payment>(step));
}

#[given("products:")]
fn given_products(world: &mut MetricsWorld, step: &Step) {
    world.products = Some(table_from_step::<Product>(step));
}

// --- When steps ---

#[when("the metrics are computed")]
fn when_metrics_computed(world: &mut MetricsWorld) {
    let orders_raw = world.orders.take().unwrap_or_else(empty_table::<Order>);
    let orders_preview = orders_raw.head(5);

    let (mut orders, mut orders_summary) = clean_table::<Order>(orders_raw).unwrap();
    orders_summary.rows_unparseable = drop_undated_orders(&mut orders);
    let (items, items_summary) =
        clean_table::<OrderItem>(world.items.take().unwrap_or_else(empty_table::<OrderItem>))
            .unwrap();
    let (payments, payments_summary) =
        clean_table::<Payment>(world.payments.take().unwrap_or_else(empty_table::<Payment>))
            .unwrap();
    let (products, products_summary) =
        clean_table::<Product>(world.products.take().unwrap_or_else(empty_table::<Product>))
            .unwrap();

    world.report = Some(analyze(Datasets {
        orders,
        items,
        payments,
        products,
        summaries: vec![
            orders_summary,
            items_summary,
            payments_summary,
            products_summary,
        ],
        orders_preview,
    }));
}

// --- Then steps ---

#[then("the status distribution is:")]
fn then_status_distribution(world: &mut MetricsWorld, step: &Step) {
    let expected: Vec<(String, usize)> = parse_rows(step)
        .into_iter()
        .map(|(status, count)| (status, count.parse().unwrap()))
        .collect();
    let actual: Vec<(String, usize)> = world
        .report()
        .status_distribution
        .iter()
        .map(|c| (c.label.clone(), c.count))
        .collect();
    assert_eq!(actual, expected);
}

#[then("the monthly revenue is:")]
fn then_monthly_revenue(world: &mut MetricsWorld, step: &Step) {
    let expected = parse_rows(step);
    let actual = &world.report().monthly_revenue;
    assert_eq!(actual.len(), expected.len());
    for (bucket, (month, revenue)) in actual.iter().zip(expected) {
        assert_eq!(bucket.month.to_string(), month);
        let revenue: f64 = revenue.parse().unwrap();
        assert!((bucket.revenue - revenue).abs() < TOLERANCE);
    }
}

#[then("the average order value by category is:")]
fn then_category_averages(world: &mut MetricsWorld, step: &Step) {
    let expected = parse_rows(step);
    let actual = &world.report().category_averages;
    assert_eq!(actual.len(), expected.len());
    for (entry, (category, average)) in actual.iter().zip(expected) {
        assert_eq!(entry.category, category);
        let average: f64 = average.parse().unwrap();
        assert!((entry.average - average).abs() < TOLERANCE);
    }
}

#[then(expr = "the joined set has {int} rows")]
fn then_joined_rows(world: &mut MetricsWorld, rows: usize) {
    assert_eq!(world.report().joined_rows, rows);
}

#[then(expr = "customer {string} has recency {int} days")]
fn then_customer_recency(world: &mut MetricsWorld, customer: String, days: i64) {
    assert_eq!(world.customer(&customer).recency_days, Some(days));
}

#[then(expr = "customer {string} has frequency {int}")]
fn then_customer_frequency(world: &mut MetricsWorld, customer: String, frequency: usize) {
    assert_eq!(world.customer(&customer).frequency, frequency);
}

#[then(expr = "customer {string} has monetary value {float}")]
fn then_customer_monetary(world: &mut MetricsWorld, customer: String, monetary: f64) {
    assert!((world.customer(&customer).monetary - monetary).abs() < TOLERANCE);
}

#[then(expr = "the most common payment method is {string}")]
fn then_most_common_payment(world: &mut MetricsWorld, method: String) {
    let top = most_common(&world.report().payment_methods).expect("no payments counted");
    assert_eq!(top.label, method);
}

#[then(expr = "the {string} table dropped {int} rows")]
fn then_table_dropped(world: &mut MetricsWorld, table: String, rows: usize) {
    let summary = world
        .report()
        .ingestion
        .iter()
        .find(|s| s.table == table)
        .unwrap_or_else(|| panic!("no summary for table {}", table));
    assert_eq!(summary.rows_dropped + summary.rows_unparseable, rows);
}

#[tokio::main]
async fn main() {
    MetricsWorld::cucumber()
        .fail_on_skipped()
        .run_and_exit("tests/features/metrics.feature")
        .await;
}
