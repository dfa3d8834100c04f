use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::form_data::FormData;

/// Acknowledgement of a confirmed final submission. Carries the complete
/// answers, exactly as they stood when the participant confirmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Submission {
    pub questionnaire_id: Option<String>,
    pub submitted_at: jiff::Timestamp,
    pub form_data: FormData,
}
