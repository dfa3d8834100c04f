use std::collections::HashSet;

use inclusa_core::models::participant::ParticipantRecord;
use jiff::civil::{Date, DateTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The figures on the dashboard's metric cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HeadlineMetrics {
    pub total_participants: usize,
    /// Rounded to one decimal; `None` for an empty dataset.
    pub mean_age: Option<f64>,
    pub regions_represented: usize,
    pub genders_represented: usize,
    pub completed_today: usize,
    #[ts(type = "string | null")]
    pub latest_completion: Option<DateTime>,
}

pub fn headline_metrics(records: &[ParticipantRecord], today: Date) -> HeadlineMetrics {
    let mean_age = if records.is_empty() {
        None
    } else {
        let total: u32 = records.iter().map(|r| u32::from(r.age)).sum();
        let mean = f64::from(total) / records.len() as f64;
        Some((mean * 10.0).round() / 10.0)
    };

    let distinct = |key: fn(&ParticipantRecord) -> &str| {
        records.iter().map(key).collect::<HashSet<_>>().len()
    };

    HeadlineMetrics {
        total_participants: records.len(),
        mean_age,
        regions_represented: distinct(|r| r.region.as_str()),
        genders_represented: distinct(|r| r.gender.as_str()),
        completed_today: records
            .iter()
            .filter(|r| r.completion_date.date() == today)
            .count(),
        latest_completion: records.iter().map(|r| r.completion_date).max(),
    }
}
