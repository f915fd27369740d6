//! Time-ranged sales reports derived from a store snapshot.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use salesdesk_core::{DocName, Money};

use crate::snapshot::StoreSnapshot;

/// Inclusive date range a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// One point of the sales trend: all order totals summed per transaction date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub amount: Money,
}

/// One row of the top-customers ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSales {
    pub customer: DocName,
    pub total_sales: Money,
}

/// One row of the top-items ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSales {
    pub item_code: String,
    pub item_name: String,
    pub qty_sold: i64,
    pub total_amount: Money,
}

/// Sales summary over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesReport {
    pub date_range: DateRange,
    /// Ascending by date.
    pub sales_trend: Vec<TrendPoint>,
    /// Descending by total sales.
    pub top_customers: Vec<CustomerSales>,
    /// Descending by total amount.
    pub top_items: Vec<ItemSales>,
}

/// Pure derivation over the snapshot's sales orders, filtered by transaction
/// date. Item names are resolved from the item collection by code; an unknown
/// code falls back to the code itself. No status filtering is applied.
pub fn compute_report(snapshot: &StoreSnapshot, range: DateRange) -> SalesReport {
    let mut trend: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    let mut customers: BTreeMap<DocName, Money> = BTreeMap::new();
    let mut items: BTreeMap<String, (i64, Money)> = BTreeMap::new();

    for order in snapshot
        .sales_orders
        .iter()
        .filter(|order| range.contains(order.transaction_date))
    {
        *trend.entry(order.transaction_date).or_insert(Money::ZERO) += order.grand_total;
        *customers
            .entry(order.customer.clone())
            .or_insert(Money::ZERO) += order.grand_total;
        for line in &order.items {
            let entry = items
                .entry(line.item_code.clone())
                .or_insert((0, Money::ZERO));
            entry.0 += line.qty;
            entry.1 += line.amount;
        }
    }

    let item_names: BTreeMap<&str, &str> = snapshot
        .items
        .iter()
        .map(|item| (item.item_code.as_str(), item.item_name.as_str()))
        .collect();

    let sales_trend = trend
        .into_iter()
        .map(|(date, amount)| TrendPoint { date, amount })
        .collect();

    let mut top_customers: Vec<CustomerSales> = customers
        .into_iter()
        .map(|(customer, total_sales)| CustomerSales {
            customer,
            total_sales,
        })
        .collect();
    // Stable sort; ties keep the BTreeMap's name ordering.
    top_customers.sort_by(|a, b| b.total_sales.cmp(&a.total_sales));

    let mut top_items: Vec<ItemSales> = items
        .into_iter()
        .map(|(item_code, (qty_sold, total_amount))| ItemSales {
            item_name: item_names
                .get(item_code.as_str())
                .map_or_else(|| item_code.clone(), |name| (*name).to_string()),
            item_code,
            qty_sold,
            total_amount,
        })
        .collect();
    top_items.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));

    SalesReport {
        date_range: range,
        sales_trend,
        top_customers,
        top_items,
    }
}
