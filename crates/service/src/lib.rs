//! `salesdesk-service` — the in-memory sales-entity service.
//!
//! Owns one insertion-ordered collection per entity kind, wraps every public
//! operation in a simulated network boundary (latency + injected failures),
//! and derives dashboard KPIs and time-ranged reports from current state on
//! demand. Collections live for the process lifetime only.

pub mod kpi;
pub mod reports;
pub mod repository;
pub mod service;
pub mod snapshot;
pub mod transport;

pub use kpi::{Kpis, compute_kpis};
pub use reports::{CustomerSales, DateRange, ItemSales, SalesReport, TrendPoint, compute_report};
pub use repository::Repository;
pub use service::{SalesService, ServiceConfig};
pub use snapshot::StoreSnapshot;
pub use transport::{SimulatedTransport, TransportConfig};
