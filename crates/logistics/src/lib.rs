//! Logistics domain module (delivery notes).
//!
//! This crate contains the delivery note document and its patch shape,
//! implemented purely as data definitions (no IO, no HTTP, no storage).

pub mod delivery;

pub use delivery::{DeliveryNote, DeliveryNotePatch, DeliveryNoteStatus, DeliveryStatus};
