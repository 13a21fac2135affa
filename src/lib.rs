//! Sales Metrics - e-commerce dashboard pipeline
//!
//! Loads the order, order item, payment, and product datasets, cleans
//! them, joins items to their products and orders, and derives the
//! dashboard metrics: order-status distribution, average order value by
//! category, monthly revenue, payment-method frequency, and a per-customer
//! RFM summary.

pub mod config;
pub mod dataset;
pub mod ingest;
pub mod join;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod utils;
