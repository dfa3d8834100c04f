//! inclusa-audit
//!
//! Structured audit trail of questionnaire sessions, written through
//! `tracing` so it lands in the same log stream as request logs.

pub mod events;

pub use events::{AuditAction, AuditEvent};
