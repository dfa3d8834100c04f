use std::collections::BTreeMap;

use inclusa_core::models::participant::ParticipantRecord;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of participants sharing one categorical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Number of participants who completed on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyCount {
    #[ts(type = "string")]
    pub date: Date,
    pub count: usize,
}

pub fn regional_distribution(records: &[ParticipantRecord]) -> Vec<CategoryCount> {
    count_by(records, |r| r.region.as_str())
}

pub fn tumor_stage_distribution(records: &[ParticipantRecord]) -> Vec<CategoryCount> {
    count_by(records, |r| r.tumor_stage.as_str())
}

/// Completions per calendar date, oldest first.
pub fn daily_trend(records: &[ParticipantRecord]) -> Vec<DailyCount> {
    let mut days: BTreeMap<Date, usize> = BTreeMap::new();
    for record in records {
        *days.entry(record.completion_date.date()).or_default() += 1;
    }
    days.into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

// Only observed categories appear. Largest group first, ties by name.
fn count_by<'a>(
    records: &'a [ParticipantRecord],
    key: impl Fn(&'a ParticipantRecord) -> &'a str,
) -> Vec<CategoryCount> {
    let mut groups: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *groups.entry(key(record)).or_default() += 1;
    }
    let mut counts: Vec<CategoryCount> = groups
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    counts
}
