//! inclusa-core
//!
//! Pure domain types, the questionnaire wizard, and per-session state.
//! No I/O and no HTTP dependency. This is the shared vocabulary of the
//! Inclusa system.

pub mod catalog;
pub mod error;
pub mod models;
pub mod option_keys;
pub mod session;
pub mod wizard;
