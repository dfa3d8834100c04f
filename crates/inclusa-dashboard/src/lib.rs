//! inclusa-dashboard
//!
//! Aggregates over the per-session participant dataset: category
//! distributions, the daily participation trend and headline metrics,
//! plus the synthetic dataset generator and data export.

pub mod aggregate;
pub mod error;
pub mod export;
pub mod metrics;
pub mod snapshot;
pub mod synthetic;

pub use error::DashboardError;
pub use snapshot::DashboardSnapshot;
