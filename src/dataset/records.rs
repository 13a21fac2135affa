//! Order, order item, payment, and product records.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{timestamp, Record};

/// Lifecycle status of an order.
///
/// Labels outside the known set are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Delivered,
    Shipped,
    Canceled,
    Unavailable,
    Invoiced,
    Processing,
    Created,
    Approved,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Delivered => "delivered",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Unavailable => "unavailable",
            OrderStatus::Invoiced => "invoiced",
            OrderStatus::Processing => "processing",
            OrderStatus::Created => "created",
            OrderStatus::Approved => "approved",
            OrderStatus::Other(label) => label,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "delivered" => OrderStatus::Delivered,
            "shipped" => OrderStatus::Shipped,
            "canceled" => OrderStatus::Canceled,
            "unavailable" => OrderStatus::Unavailable,
            "invoiced" => OrderStatus::Invoiced,
            "processing" => OrderStatus::Processing,
            "created" => OrderStatus::Created,
            "approved" => OrderStatus::Approved,
            _ => OrderStatus::Other(label),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment instrument used for (part of) an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentType {
    CreditCard,
    Boleto,
    Voucher,
    DebitCard,
    NotDefined,
    Other(String),
}

impl PaymentType {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentType::CreditCard => "credit_card",
            PaymentType::Boleto => "boleto",
            PaymentType::Voucher => "voucher",
            PaymentType::DebitCard => "debit_card",
            PaymentType::NotDefined => "not_defined",
            PaymentType::Other(label) => label,
        }
    }
}

impl From<String> for PaymentType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "credit_card" => PaymentType::CreditCard,
            "boleto" => PaymentType::Boleto,
            "voucher" => PaymentType::Voucher,
            "debit_card" => PaymentType::DebitCard,
            "not_defined" => PaymentType::NotDefined,
            _ => PaymentType::Other(label),
        }
    }
}

impl From<PaymentType> for String {
    fn from(kind: PaymentType) -> Self {
        match kind {
            PaymentType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub order_status: OrderStatus,
    /// Approval timestamp; `None` when the cell could not be parsed.
    #[serde(rename = "order_approved_at", deserialize_with = "timestamp::lenient")]
    pub approved_at: Option<NaiveDateTime>,
}

impl Record for Order {
    const TABLE: &'static str = "orders";
    const REQUIRED_COLUMNS: &'static [&'static str] =
        &["order_id", "customer_id", "order_status", "order_approved_at"];
}

/// One line of an order, keyed by (`order_id`, `order_item_id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: String,
    pub order_item_id: u32,
    pub product_id: String,
    pub price: f64,
}

impl Record for OrderItem {
    const TABLE: &'static str = "order_items";
    const REQUIRED_COLUMNS: &'static [&'static str] =
        &["order_id", "order_item_id", "product_id", "price"];
}

/// A payment made against an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub order_id: String,
    pub payment_sequential: u32,
    pub payment_type: PaymentType,
    pub payment_installments: u32,
    pub payment_value: f64,
}

impl Record for Payment {
    const TABLE: &'static str = "payments";
    const REQUIRED_COLUMNS: &'static [&'static str] = &[
        "order_id",
        "payment_sequential",
        "payment_type",
        "payment_installments",
        "payment_value",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    #[serde(rename = "product_category_name")]
    pub category: String,
}

impl Record for Product {
    const TABLE: &'static str = "products";
    const REQUIRED_COLUMNS: &'static [&'static str] = &["product_id", "product_category_name"];
}
