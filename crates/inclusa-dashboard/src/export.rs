use std::fmt;
use std::str::FromStr;

use inclusa_core::models::participant::ParticipantRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::DashboardError;

const CSV_HEADER: [&str; 6] = ["id", "region", "gender", "age", "tumor_stage", "completion_date"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ExportFormat {
    Csv,
    Json,
    /// Offered by the export panel but not produced.
    Excel,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "excel",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            other => Err(DashboardError::UnknownFormat(other.to_string())),
        }
    }
}

/// A rendered export, ready to be sent as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub format: ExportFormat,
    pub content_type: &'static str,
    pub filename: String,
    pub body: String,
}

pub fn export_participants(
    records: &[ParticipantRecord],
    format: ExportFormat,
) -> Result<Export, DashboardError> {
    let (content_type, body) = match format {
        ExportFormat::Csv => ("text/csv; charset=utf-8", build_csv(records)),
        ExportFormat::Json => (
            "application/json",
            serde_json::to_string_pretty(records)?,
        ),
        ExportFormat::Excel => return Err(DashboardError::UnsupportedFormat(format)),
    };
    Ok(Export {
        format,
        content_type,
        filename: format!("participants.{format}"),
        body,
    })
}

fn build_csv(records: &[ParticipantRecord]) -> String {
    let mut csv = CSV_HEADER.join(",");
    csv.push('\n');
    for record in records {
        let row = [
            record.id.to_string(),
            escape_csv(&record.region),
            escape_csv(&record.gender),
            record.age.to_string(),
            escape_csv(&record.tumor_stage),
            record.completion_date.to_string(),
        ];
        csv.push_str(&row.join(","));
        csv.push('\n');
    }
    csv
}

fn escape_csv(value: &str) -> String {
    let needs_quotes = value.contains([',', '"', '\n', '\r']);
    if needs_quotes {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
