//! Typed records for the four source datasets.
//!
//! Each record type names the table it comes from and the columns it
//! requires, so ingestion can reject a file that lacks them before any
//! row is deserialized.

mod records;
mod timestamp;

pub use records::{Order, OrderItem, OrderStatus, Payment, PaymentType, Product};
pub use timestamp::parse_timestamp;

use serde::de::DeserializeOwned;

/// A row type that can be deserialized from a cleaned source table.
pub trait Record: DeserializeOwned {
    /// Name of the source table, used in logs and errors.
    const TABLE: &'static str;

    /// Columns that must be present in the source header.
    const REQUIRED_COLUMNS: &'static [&'static str];
}
