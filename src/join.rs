//! Inner join of order items with products and orders.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use crate::dataset::{Order, OrderItem, OrderStatus, Product};

/// An order item enriched with its product category and parent order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinedRow {
    pub order_id: String,
    pub order_item_id: u32,
    pub product_id: String,
    pub price: f64,
    pub category: String,
    pub customer_id: String,
    pub order_status: OrderStatus,
    pub approved_at: Option<NaiveDateTime>,
}

fn index_by<'a, T, F>(rows: &'a [T], key: F) -> HashMap<&'a str, Vec<&'a T>>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut index: HashMap<&str, Vec<&T>> = HashMap::with_capacity(rows.len());
    for row in rows {
        index.entry(key(row)).or_default().push(row);
    }
    index
}

/// Join items to products on `product_id`, then to orders on `order_id`.
///
/// Items without a matching product or order are dropped. Duplicate keys
/// on the right-hand side yield one output row per match. Output follows
/// item order.
pub fn join(items: &[OrderItem], products: &[Product], orders: &[Order]) -> Vec<JoinedRow> {
    let (joined, excluded) = join_counting_excluded(items, products, orders);
    debug!(
        items = items.len(),
        joined = joined.len(),
        excluded,
        "Joined items with products and orders"
    );
    joined
}

/// The join, plus the number of items that found no product or order.
fn join_counting_excluded(
    items: &[OrderItem],
    products: &[Product],
    orders: &[Order],
) -> (Vec<JoinedRow>, usize) {
    let products_by_id = index_by(products, |p| p.product_id.as_str());
    let orders_by_id = index_by(orders, |o| o.order_id.as_str());

    let mut joined = Vec::with_capacity(items.len());
    let mut excluded = 0usize;
    for item in items {
        let (Some(matching_products), Some(matching_orders)) = (
            products_by_id.get(item.product_id.as_str()),
            orders_by_id.get(item.order_id.as_str()),
        ) else {
            excluded += 1;
            continue;
        };

        for product in matching_products {
            for order in matching_orders {
                joined.push(JoinedRow {
                    order_id: item.order_id.clone(),
                    order_item_id: item.order_item_id,
                    product_id: item.product_id.clone(),
                    price: item.price,
                    category: product.category.clone(),
                    customer_id: order.customer_id.clone(),
                    order_status: order.order_status.clone(),
                    approved_at: order.approved_at,
                });
            }
        }
    }

    (joined, excluded)
}
