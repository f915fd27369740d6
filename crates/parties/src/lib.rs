//! Parties domain module (customers).
//!
//! This crate contains the customer record and its patch shape, implemented
//! purely as data definitions (no IO, no HTTP, no storage).

pub mod customer;

pub use customer::{ContactInfo, Customer, CustomerPatch, CustomerType};
