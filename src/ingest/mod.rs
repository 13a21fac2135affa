//! Loading and cleaning of the four source datasets.
//!
//! Every set is read in full, reported on, and cleaned independently:
//! a row missing any cell is removed from its own table only. A source
//! that cannot be read aborts the whole load.

mod table;

pub use table::{ColumnMissing, MissingValueReport, Table};

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::DataConfig;
use crate::dataset::{Order, OrderItem, Payment, Product, Record};

/// Result type for ingestion.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Errors that abort ingestion.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Failed to open {table} at {}: {source}", .path.display())]
    Io {
        table: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {table}: {source}")]
    Csv {
        table: String,
        #[source]
        source: csv::Error,
    },

    /// `row` is the 1-based data row of the source file, header excluded.
    #[error("Malformed row {row} in {table}: {source}")]
    Malformed {
        table: String,
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("{table} is missing required column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("Delimiter {0:?} is not a single-byte character")]
    InvalidDelimiter(char),
}

/// What happened to one source table during ingestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary {
    pub table: String,
    /// Rows read from the source.
    pub rows_loaded: usize,
    /// Rows removed for having a missing cell.
    pub rows_dropped: usize,
    /// Rows removed because a timestamp could not be parsed.
    pub rows_unparseable: usize,
    /// Missing-value counts taken before cleaning.
    pub missing: MissingValueReport,
}

impl TableSummary {
    /// Rows that survived cleaning.
    pub fn rows_kept(&self) -> usize {
        self.rows_loaded - self.rows_dropped - self.rows_unparseable
    }
}

/// The four cleaned, typed datasets.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub orders: Vec<Order>,
    pub items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
    pub products: Vec<Product>,
    /// One summary per source, in load order.
    pub summaries: Vec<TableSummary>,
    /// Leading rows of the orders source, before cleaning.
    pub orders_preview: Table,
}

/// Read one delimited file into a raw table.
pub fn load_table(path: &Path, name: &str, delimiter: u8) -> Result<Table> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        table: name.to_string(),
        path: path.to_path_buf(),
        source,
    })?;
    let table = Table::from_reader(name, BufReader::new(file), delimiter)?;
    debug!(
        table = %name,
        path = %path.display(),
        rows = table.len(),
        columns = table.columns().len(),
        "Loaded table"
    );
    Ok(table)
}

/// Report, clean, and type one raw table.
pub fn clean_table<T: Record>(mut table: Table) -> Result<(Vec<T>, TableSummary)> {
    table.require_columns::<T>()?;

    let missing = table.missing_values();
    let rows_loaded = table.len();
    let rows_dropped = table.drop_missing();
    if rows_dropped > 0 {
        info!(
            table = %T::TABLE,
            rows_dropped,
            rows_kept = table.len(),
            "Dropped rows with missing values"
        );
    }

    let records = table.records::<T>()?;
    let summary = TableSummary {
        table: T::TABLE.to_string(),
        rows_loaded,
        rows_dropped,
        rows_unparseable: 0,
        missing,
    };
    Ok((records, summary))
}

/// Drop orders whose approval timestamp did not parse.
///
/// Returns the number of orders removed.
pub fn drop_undated_orders(orders: &mut Vec<Order>) -> usize {
    let before = orders.len();
    orders.retain(|o| o.approved_at.is_some());
    let removed = before - orders.len();
    if removed > 0 {
        warn!(
            removed,
            "Excluded orders with unparseable approval timestamps"
        );
    }
    removed
}

/// Load, report on, and clean all four datasets.
pub fn load_datasets(config: &DataConfig) -> Result<Datasets> {
    let delimiter =
        u8::try_from(config.delimiter).map_err(|_| IngestError::InvalidDelimiter(config.delimiter))?;

    let orders_raw = load_table(&config.orders_path(), Order::TABLE, delimiter)?;
    let items_raw = load_table(&config.order_items_path(), OrderItem::TABLE, delimiter)?;
    let payments_raw = load_table(&config.payments_path(), Payment::TABLE, delimiter)?;
    let products_raw = load_table(&config.products_path(), Product::TABLE, delimiter)?;

    let orders_preview = orders_raw.head(config.preview_rows);

    let (mut orders, mut orders_summary) = clean_table::<Order>(orders_raw)?;
    orders_summary.rows_unparseable = drop_undated_orders(&mut orders);
    let (items, items_summary) = clean_table::<OrderItem>(items_raw)?;
    let (payments, payments_summary) = clean_table::<Payment>(payments_raw)?;
    let (products, products_summary) = clean_table::<Product>(products_raw)?;

    info!(
        orders = orders.len(),
        items = items.len(),
        payments = payments.len(),
        products = products.len(),
        "Datasets loaded"
    );

    Ok(Datasets {
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
    })
}
