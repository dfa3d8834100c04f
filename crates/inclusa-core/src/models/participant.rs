use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One row of the synthetic dashboard dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParticipantRecord {
    pub id: u32,
    pub region: String,
    pub gender: String,
    pub age: u8,
    pub tumor_stage: String,
    /// Timezone-naive; the dashboard groups on its calendar date.
    #[ts(type = "string")]
    pub completion_date: jiff::civil::DateTime,
}
