//! Source dataset configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Where the four source files live and how they are delimited.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the source files.
    pub dir: PathBuf,
    pub orders_file: String,
    pub order_items_file: String,
    pub payments_file: String,
    pub products_file: String,
    /// Field delimiter. Must be a single-byte character.
    pub delimiter: char,
    /// Leading rows of the orders source kept for the sample preview.
    pub preview_rows: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            orders_file: "olist_orders_dataset.csv".to_string(),
            order_items_file: "olist_order_items_dataset.csv".to_string(),
            payments_file: "olist_order_payments_dataset.csv".to_string(),
            products_file: "olist_products_dataset.csv".to_string(),
            delimiter: ',',
            preview_rows: 5,
        }
    }
}

impl DataConfig {
    /// Config reading the default file names from `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Default::default()
        }
    }

    pub fn orders_path(&self) -> PathBuf {
        self.dir.join(&self.orders_file)
    }

    pub fn order_items_path(&self) -> PathBuf {
        self.dir.join(&self.order_items_file)
    }

    pub fn payments_path(&self) -> PathBuf {
        self.dir.join(&self.payments_file)
    }

    pub fn products_path(&self) -> PathBuf {
        self.dir.join(&self.products_file)
    }
}
