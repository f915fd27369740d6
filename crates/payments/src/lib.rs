//! Payments domain module (payment entries).
//!
//! This crate contains the payment entry document and its patch shape,
//! implemented purely as data definitions (no IO, no HTTP, no storage).

pub mod payment;

pub use payment::{PaymentEntry, PaymentEntryPatch, PaymentMode, PaymentType};
