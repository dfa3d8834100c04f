use inclusa_core::error::CatalogError;
use thiserror::Error;

use crate::export::ExportFormat;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("no '{0}' categories to draw participants from")]
    EmptyPool(&'static str),

    #[error("unknown export format: {0}")]
    UnknownFormat(String),

    #[error("export format '{0}' is not supported")]
    UnsupportedFormat(ExportFormat),

    #[error("date arithmetic failed: {0}")]
    Date(#[from] jiff::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
