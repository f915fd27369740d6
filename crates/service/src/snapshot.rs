//! Point-in-time copy of every collection, consumed by the derivations.

use salesdesk_invoicing::SalesInvoice;
use salesdesk_logistics::DeliveryNote;
use salesdesk_payments::PaymentEntry;
use salesdesk_products::Item;
use salesdesk_sales::{Quotation, SalesOrder};

/// Cloned store contents at one instant.
///
/// KPI and report computation work on a snapshot rather than the live
/// collections, so a derivation can never observe a half-applied mutation and
/// never holds a lock while computing.
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    pub items: Vec<Item>,
    pub quotations: Vec<Quotation>,
    pub sales_orders: Vec<SalesOrder>,
    pub delivery_notes: Vec<DeliveryNote>,
    pub sales_invoices: Vec<SalesInvoice>,
    pub payment_entries: Vec<PaymentEntry>,
}
