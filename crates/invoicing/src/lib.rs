//! Invoicing domain module (sales invoices).
//!
//! This crate contains the sales invoice document and its patch shape,
//! implemented purely as data definitions (no IO, no HTTP, no storage).

pub mod invoice;

pub use invoice::{InvoiceStatus, SalesInvoice, SalesInvoicePatch};
