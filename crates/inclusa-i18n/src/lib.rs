//! inclusa-i18n
//!
//! Bundled English and Chinese string tables for the questionnaire. Pure
//! data: the catalogs are embedded at compile time, validated once at
//! startup and shared read-only afterwards.

pub mod error;
pub mod table;

pub use error::LocaleError;
pub use table::{Dictionary, Entry, LocalizationTable};
