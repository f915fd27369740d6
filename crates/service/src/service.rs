//! Service facade: every entity collection behind the simulated transport.

use chrono::Utc;

use salesdesk_core::{DocName, NameGenerator, StoreResult};
use salesdesk_invoicing::{SalesInvoice, SalesInvoicePatch};
use salesdesk_logistics::{DeliveryNote, DeliveryNotePatch};
use salesdesk_parties::{Customer, CustomerPatch};
use salesdesk_payments::{PaymentEntry, PaymentEntryPatch};
use salesdesk_products::{Item, ItemPatch, StockBalance};
use salesdesk_sales::{Quotation, QuotationPatch, SalesOrder, SalesOrderPatch};

use crate::kpi::{self, Kpis};
use crate::reports::{self, DateRange, SalesReport};
use crate::repository::Repository;
use crate::snapshot::StoreSnapshot;
use crate::transport::{SimulatedTransport, TransportConfig};

/// Construction-time configuration for [`SalesService`].
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    pub transport: TransportConfig,
    /// Fixed seed for document-name generation; `None` seeds from entropy.
    pub name_seed: Option<u64>,
    /// Stock rows served by [`SalesService::stock_balance`]. The collection
    /// is read-only for the service's lifetime.
    pub stock_balances: Vec<StockBalance>,
}

impl ServiceConfig {
    /// Deterministic, zero-latency, failure-free configuration for tests.
    pub fn reliable() -> Self {
        Self {
            transport: TransportConfig::reliable(),
            name_seed: Some(0),
            stock_balances: Vec::new(),
        }
    }
}

fn generator(seed: Option<u64>, offset: u64) -> NameGenerator {
    match seed {
        Some(seed) => NameGenerator::seeded(seed.wrapping_add(offset)),
        None => NameGenerator::from_entropy(),
    }
}

/// Sole owner of all mutable business records.
///
/// One independently owned repository per entity kind; no cross-kind mutation
/// ever happens (creating a delivery note never touches the originating
/// order, and payments never touch invoices). Every public operation passes
/// through the simulated transport, so callers see realistic latency and the
/// occasional retryable failure.
///
/// Operations are async but cooperative: overlapping updates against the same
/// name resolve last-writer-wins by completion order, with no ordering
/// guarantee tied to call-issue order. Callers needing deterministic ordering
/// must await each mutation before issuing the next.
#[derive(Debug)]
pub struct SalesService {
    transport: SimulatedTransport,
    customers: Repository<Customer>,
    items: Repository<Item>,
    quotations: Repository<Quotation>,
    sales_orders: Repository<SalesOrder>,
    delivery_notes: Repository<DeliveryNote>,
    sales_invoices: Repository<SalesInvoice>,
    payment_entries: Repository<PaymentEntry>,
    stock_balances: Vec<StockBalance>,
}

impl SalesService {
    pub fn new(config: ServiceConfig) -> Self {
        let seed = config.name_seed;
        Self {
            transport: SimulatedTransport::new(config.transport),
            customers: Repository::new(generator(seed, 1)),
            items: Repository::new(generator(seed, 2)),
            quotations: Repository::new(generator(seed, 3)),
            sales_orders: Repository::new(generator(seed, 4)),
            delivery_notes: Repository::new(generator(seed, 5)),
            sales_invoices: Repository::new(generator(seed, 6)),
            payment_entries: Repository::new(generator(seed, 7)),
            stock_balances: config.stock_balances,
        }
    }

    fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            items: self.items.list(),
            quotations: self.quotations.list(),
            sales_orders: self.sales_orders.list(),
            delivery_notes: self.delivery_notes.list(),
            sales_invoices: self.sales_invoices.list(),
            payment_entries: self.payment_entries.list(),
        }
    }

    // -------------------------
    // Customers
    // -------------------------

    pub async fn customers(&self) -> StoreResult<Vec<Customer>> {
        self.transport.invoke(|| Ok(self.customers.list())).await
    }

    pub async fn customer(&self, name: &DocName) -> StoreResult<Option<Customer>> {
        self.transport.invoke(|| Ok(self.customers.get(name))).await
    }

    pub async fn create_customer(&self, customer: Customer) -> StoreResult<Customer> {
        self.transport
            .invoke(|| Ok(self.customers.insert(customer)))
            .await
    }

    pub async fn update_customer(
        &self,
        name: &DocName,
        patch: CustomerPatch,
    ) -> StoreResult<Customer> {
        self.transport
            .invoke(|| self.customers.update(name, patch))
            .await
    }

    pub async fn delete_customer(&self, name: &DocName) -> StoreResult<()> {
        self.transport.invoke(|| self.customers.remove(name)).await
    }

    // -------------------------
    // Items
    // -------------------------

    pub async fn items(&self) -> StoreResult<Vec<Item>> {
        self.transport.invoke(|| Ok(self.items.list())).await
    }

    pub async fn item(&self, name: &DocName) -> StoreResult<Option<Item>> {
        self.transport.invoke(|| Ok(self.items.get(name))).await
    }

    pub async fn create_item(&self, item: Item) -> StoreResult<Item> {
        self.transport.invoke(|| Ok(self.items.insert(item))).await
    }

    pub async fn update_item(&self, name: &DocName, patch: ItemPatch) -> StoreResult<Item> {
        self.transport.invoke(|| self.items.update(name, patch)).await
    }

    pub async fn delete_item(&self, name: &DocName) -> StoreResult<()> {
        self.transport.invoke(|| self.items.remove(name)).await
    }

    // -------------------------
    // Quotations
    // -------------------------

    pub async fn quotations(&self) -> StoreResult<Vec<Quotation>> {
        self.transport.invoke(|| Ok(self.quotations.list())).await
    }

    pub async fn quotation(&self, name: &DocName) -> StoreResult<Option<Quotation>> {
        self.transport
            .invoke(|| Ok(self.quotations.get(name)))
            .await
    }

    pub async fn create_quotation(&self, quotation: Quotation) -> StoreResult<Quotation> {
        self.transport
            .invoke(|| Ok(self.quotations.insert(quotation)))
            .await
    }

    pub async fn update_quotation(
        &self,
        name: &DocName,
        patch: QuotationPatch,
    ) -> StoreResult<Quotation> {
        self.transport
            .invoke(|| self.quotations.update(name, patch))
            .await
    }

    pub async fn delete_quotation(&self, name: &DocName) -> StoreResult<()> {
        self.transport
            .invoke(|| self.quotations.remove(name))
            .await
    }

    // -------------------------
    // Sales orders
    // -------------------------

    pub async fn sales_orders(&self) -> StoreResult<Vec<SalesOrder>> {
        self.transport
            .invoke(|| Ok(self.sales_orders.list()))
            .await
    }

    pub async fn sales_order(&self, name: &DocName) -> StoreResult<Option<SalesOrder>> {
        self.transport
            .invoke(|| Ok(self.sales_orders.get(name)))
            .await
    }

    pub async fn create_sales_order(&self, order: SalesOrder) -> StoreResult<SalesOrder> {
        self.transport
            .invoke(|| Ok(self.sales_orders.insert(order)))
            .await
    }

    pub async fn update_sales_order(
        &self,
        name: &DocName,
        patch: SalesOrderPatch,
    ) -> StoreResult<SalesOrder> {
        self.transport
            .invoke(|| self.sales_orders.update(name, patch))
            .await
    }

    pub async fn delete_sales_order(&self, name: &DocName) -> StoreResult<()> {
        self.transport
            .invoke(|| self.sales_orders.remove(name))
            .await
    }

    // -------------------------
    // Delivery notes
    // -------------------------

    pub async fn delivery_notes(&self) -> StoreResult<Vec<DeliveryNote>> {
        self.transport
            .invoke(|| Ok(self.delivery_notes.list()))
            .await
    }

    pub async fn delivery_note(&self, name: &DocName) -> StoreResult<Option<DeliveryNote>> {
        self.transport
            .invoke(|| Ok(self.delivery_notes.get(name)))
            .await
    }

    pub async fn create_delivery_note(&self, note: DeliveryNote) -> StoreResult<DeliveryNote> {
        self.transport
            .invoke(|| Ok(self.delivery_notes.insert(note)))
            .await
    }

    pub async fn update_delivery_note(
        &self,
        name: &DocName,
        patch: DeliveryNotePatch,
    ) -> StoreResult<DeliveryNote> {
        self.transport
            .invoke(|| self.delivery_notes.update(name, patch))
            .await
    }

    pub async fn delete_delivery_note(&self, name: &DocName) -> StoreResult<()> {
        self.transport
            .invoke(|| self.delivery_notes.remove(name))
            .await
    }

    // -------------------------
    // Sales invoices
    // -------------------------

    pub async fn sales_invoices(&self) -> StoreResult<Vec<SalesInvoice>> {
        self.transport
            .invoke(|| Ok(self.sales_invoices.list()))
            .await
    }

    pub async fn sales_invoice(&self, name: &DocName) -> StoreResult<Option<SalesInvoice>> {
        self.transport
            .invoke(|| Ok(self.sales_invoices.get(name)))
            .await
    }

    pub async fn create_sales_invoice(&self, invoice: SalesInvoice) -> StoreResult<SalesInvoice> {
        self.transport
            .invoke(|| Ok(self.sales_invoices.insert(invoice)))
            .await
    }

    pub async fn update_sales_invoice(
        &self,
        name: &DocName,
        patch: SalesInvoicePatch,
    ) -> StoreResult<SalesInvoice> {
        self.transport
            .invoke(|| self.sales_invoices.update(name, patch))
            .await
    }

    pub async fn delete_sales_invoice(&self, name: &DocName) -> StoreResult<()> {
        self.transport
            .invoke(|| self.sales_invoices.remove(name))
            .await
    }

    // -------------------------
    // Payment entries
    // -------------------------

    pub async fn payment_entries(&self) -> StoreResult<Vec<PaymentEntry>> {
        self.transport
            .invoke(|| Ok(self.payment_entries.list()))
            .await
    }

    pub async fn payment_entry(&self, name: &DocName) -> StoreResult<Option<PaymentEntry>> {
        self.transport
            .invoke(|| Ok(self.payment_entries.get(name)))
            .await
    }

    pub async fn create_payment_entry(&self, payment: PaymentEntry) -> StoreResult<PaymentEntry> {
        self.transport
            .invoke(|| Ok(self.payment_entries.insert(payment)))
            .await
    }

    pub async fn update_payment_entry(
        &self,
        name: &DocName,
        patch: PaymentEntryPatch,
    ) -> StoreResult<PaymentEntry> {
        self.transport
            .invoke(|| self.payment_entries.update(name, patch))
            .await
    }

    pub async fn delete_payment_entry(&self, name: &DocName) -> StoreResult<()> {
        self.transport
            .invoke(|| self.payment_entries.remove(name))
            .await
    }

    // -------------------------
    // Derivations
    // -------------------------

    /// Recompute the dashboard KPIs from current state. "Today" is the
    /// current UTC date.
    pub async fn kpis(&self) -> StoreResult<Kpis> {
        self.transport
            .invoke(|| Ok(kpi::compute_kpis(&self.snapshot(), Utc::now().date_naive())))
            .await
    }

    /// Summarize sales over an inclusive date range.
    pub async fn report(&self, range: DateRange) -> StoreResult<SalesReport> {
        self.transport
            .invoke(|| Ok(reports::compute_report(&self.snapshot(), range)))
            .await
    }

    /// Stock rows for an item, optionally narrowed to one warehouse.
    pub async fn stock_balance(
        &self,
        item_code: &str,
        warehouse: Option<&str>,
    ) -> StoreResult<Vec<StockBalance>> {
        self.transport
            .invoke(|| {
                Ok(self
                    .stock_balances
                    .iter()
                    .filter(|balance| balance.item_code == item_code)
                    .filter(|balance| warehouse.is_none_or(|w| balance.warehouse == w))
                    .cloned()
                    .collect())
            })
            .await
    }
}

impl Default for SalesService {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}
