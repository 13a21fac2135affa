//! Monthly revenue from approved orders.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::join::JoinedRow;

/// A calendar month, held as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    first: NaiveDate,
}

impl Month {
    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date - Days::new(u64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Last calendar day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.first + Months::new(1) - Days::new(1)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Revenue total for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRevenue {
    pub month: Month,
    /// Last day of the month, the bucket's closing edge.
    pub period_end: NaiveDate,
    pub revenue: f64,
    /// Orders that contributed to the total.
    pub orders: usize,
}

/// Sum item prices per order, then per approval month.
///
/// Orders without an approval timestamp are skipped. Only months with at
/// least one order appear, in chronological order.
pub fn monthly_revenue(rows: &[JoinedRow]) -> Vec<MonthlyRevenue> {
    let mut per_order: BTreeMap<&str, (f64, Option<NaiveDateTime>)> = BTreeMap::new();
    for row in rows {
        let (total, approved_at) = per_order.entry(row.order_id.as_str()).or_default();
        *total += row.price;
        if approved_at.is_none() {
            *approved_at = row.approved_at;
        }
    }

    let mut buckets: BTreeMap<Month, MonthlyRevenue> = BTreeMap::new();
    for (total, approved_at) in per_order.into_values() {
        let Some(approved_at) = approved_at else {
            continue;
        };
        let month = Month::containing(approved_at.date());
        let bucket = buckets.entry(month).or_insert_with(|| MonthlyRevenue {
            month,
            period_end: month.last_day(),
            revenue: 0.0,
            orders: 0,
        });
        bucket.revenue += total;
        bucket.orders += 1;
    }

    debug!(months = buckets.len(), "Computed monthly revenue");
    buckets.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join::join;
    use crate::join::tests::{item, order, product};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_display_and_order() {
        let jan = Month::containing(date(2018, 1, 15));
        let dec = Month::containing(date(2017, 12, 31));
        assert_eq!(jan.to_string(), "2018-01");
        assert!(dec < jan);
    }

    #[test]
    fn test_month_last_day() {
        let cases = [
            (date(2018, 2, 3), date(2018, 2, 28)),
            (date(2016, 2, 29), date(2016, 2, 29)),
            (date(2017, 12, 1), date(2017, 12, 31)),
            (date(1900, 2, 10), date(1900, 2, 28)),
            (date(2000, 2, 10), date(2000, 2, 29)),
            (date(2018, 4, 30), date(2018, 4, 30)),
        ];
        for (day, last) in cases {
            assert_eq!(Month::containing(day).last_day(), last);
        }
    }

    #[test]
    fn test_month_first_day_and_parts() {
        let month = Month::containing(date(2018, 3, 10));
        assert_eq!(month.first_day(), date(2018, 3, 1));
        assert_eq!(month.last_day(), date(2018, 3, 31));
        assert_eq!((month.year(), month.month()), (2018, 3));
        assert_eq!(Month::containing(date(2018, 3, 31)), month);
    }

    #[test]
    fn test_monthly_revenue_two_months() {
        let orders = vec![
            order("o1", "c1", "delivered", "2018-01-15"),
            order("o2", "c2", "delivered", "2018-02-20"),
        ];
        let products = vec![product("p1", "toys")];
        let items = vec![item("o1", 1, "p1", 10.0), item("o2", 1, "p1", 20.0)];

        let revenue = monthly_revenue(&join(&items, &products, &orders));

        let flat: Vec<(String, f64)> = revenue
            .iter()
            .map(|r| (r.month.to_string(), r.revenue))
            .collect();
        assert_eq!(
            flat,
            vec![("2018-01".to_string(), 10.0), ("2018-02".to_string(), 20.0)]
        );
        assert_eq!(revenue[0].period_end, date(2018, 1, 31));
        assert_eq!(revenue[1].period_end, date(2018, 2, 28));
    }

    #[test]
    fn test_monthly_revenue_sums_items_of_same_order_once() {
        let orders = vec![
            order("o1", "c1", "delivered", "2018-03-01 09:00:00"),
            order("o2", "c2", "delivered", "2018-03-31 23:59:59"),
        ];
        let products = vec![product("p1", "toys")];
        let items = vec![
            item("o1", 1, "p1", 10.0),
            item("o1", 2, "p1", 2.5),
            item("o2", 1, "p1", 7.5),
        ];

        let revenue = monthly_revenue(&join(&items, &products, &orders));

        assert_eq!(revenue.len(), 1);
        assert_eq!(revenue[0].revenue, 20.0);
        assert_eq!(revenue[0].orders, 2);
    }

    #[test]
    fn test_monthly_revenue_skips_gaps_and_undated_orders() {
        let orders = vec![
            order("o1", "c1", "delivered", "2018-01-15"),
            order("o2", "c2", "delivered", "2018-04-02"),
            order("o3", "c3", "delivered", "unknown"),
        ];
        let products = vec![product("p1", "toys")];
        let items = vec![
            item("o1", 1, "p1", 1.0),
            item("o2", 1, "p1", 2.0),
            item("o3", 1, "p1", 4.0),
        ];
        let joined = join(&items, &products, &orders);

        let revenue = monthly_revenue(&joined);

        let months: Vec<String> = revenue.iter().map(|r| r.month.to_string()).collect();
        assert_eq!(months, vec!["2018-01", "2018-04"]);

        let dated_total: f64 = joined
            .iter()
            .filter(|r| r.approved_at.is_some())
            .map(|r| r.price)
            .sum();
        let bucket_total: f64 = revenue.iter().map(|r| r.revenue).sum();
        assert!((dated_total - bucket_total).abs() < 1e-9);
    }
}
