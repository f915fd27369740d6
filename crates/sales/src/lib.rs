//! Sales domain module (quotations and sales orders).
//!
//! This crate contains the selling-side documents and their patch shapes,
//! implemented purely as data definitions (no IO, no HTTP, no storage).

pub mod order;
pub mod quotation;

pub use order::{SalesOrder, SalesOrderPatch, SalesOrderStatus};
pub use quotation::{Quotation, QuotationPatch, QuotationStatus};
