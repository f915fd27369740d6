//! Dashboard KPIs, fully recomputed from a store snapshot on demand.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use salesdesk_core::Money;
use salesdesk_invoicing::InvoiceStatus;
use salesdesk_logistics::DeliveryStatus;

use crate::snapshot::StoreSnapshot;

/// Headline figures for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpis {
    /// Sum of grand totals over sales orders transacted today (exact date
    /// match, not a range).
    pub today_sales: Money,
    /// Delivery notes whose delivery status is anything but `Delivered`.
    pub pending_deliveries: usize,
    /// Sum of outstanding amounts over invoices not yet `Paid`.
    pub outstanding_payments: Money,
    pub quotations_count: usize,
    pub orders_count: usize,
    pub deliveries_count: usize,
    pub invoices_count: usize,
    pub payments_count: usize,
}

/// Pure derivation: never mutates anything, deterministic for a fixed
/// snapshot and date, safe to call at any frequency.
pub fn compute_kpis(snapshot: &StoreSnapshot, today: NaiveDate) -> Kpis {
    let today_sales = snapshot
        .sales_orders
        .iter()
        .filter(|order| order.transaction_date == today)
        .map(|order| order.grand_total)
        .sum();

    let pending_deliveries = snapshot
        .delivery_notes
        .iter()
        .filter(|note| note.delivery_status != DeliveryStatus::Delivered)
        .count();

    let outstanding_payments = snapshot
        .sales_invoices
        .iter()
        .filter(|invoice| invoice.status != InvoiceStatus::Paid)
        .map(|invoice| invoice.outstanding_amount)
        .sum();

    Kpis {
        today_sales,
        pending_deliveries,
        outstanding_payments,
        quotations_count: snapshot.quotations.len(),
        orders_count: snapshot.sales_orders.len(),
        deliveries_count: snapshot.delivery_notes.len(),
        invoices_count: snapshot.sales_invoices.len(),
        payments_count: snapshot.payment_entries.len(),
    }
}
