use inclusa_core::models::participant::ParticipantRecord;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::aggregate::{self, CategoryCount, DailyCount};
use crate::metrics::{self, HeadlineMetrics};

/// Everything the dashboard tab shows, computed fresh from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardSnapshot {
    pub metrics: HeadlineMetrics,
    pub regional: Vec<CategoryCount>,
    pub tumor_stages: Vec<CategoryCount>,
    pub daily: Vec<DailyCount>,
}

impl DashboardSnapshot {
    pub fn from_records(records: &[ParticipantRecord], today: Date) -> Self {
        Self {
            metrics: metrics::headline_metrics(records, today),
            regional: aggregate::regional_distribution(records),
            tumor_stages: aggregate::tumor_stage_distribution(records),
            daily: aggregate::daily_trend(records),
        }
    }
}
