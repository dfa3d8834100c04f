use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The four statements a participant must accept before the questionnaire
/// opens. Each box is independent; missing boxes deserialize as unticked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ConsentRecord {
    pub purpose_understood: bool,
    pub agree_to_participate: bool,
    pub understand_data_use: bool,
    pub age_confirmed: bool,
}

impl ConsentRecord {
    pub fn all_given() -> Self {
        Self {
            purpose_understood: true,
            agree_to_participate: true,
            understand_data_use: true,
            age_confirmed: true,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.purpose_understood
            && self.agree_to_participate
            && self.understand_data_use
            && self.age_confirmed
    }
}
