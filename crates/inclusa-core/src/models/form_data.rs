use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::demographics::{Demographics, SurveyInfo};
use super::medical_history::MedicalHistory;
use super::research::Research;
use super::symptoms::Symptoms;
use crate::error::CoreError;

/// Accumulated answers of one participant.
///
/// Each step owns exactly one section and replaces it whole when its answers
/// are accepted; no step ever clears another step's section. Serialized as
/// the nested string-keyed mapping a downstream writer consumes on
/// submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questionnaire_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey: Option<SurveyInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demographics: Option<Demographics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<MedicalHistory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<Symptoms>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research: Option<Research>,
}

impl FormData {
    pub fn is_empty(&self) -> bool {
        *self == FormData::default()
    }

    /// Names of the sections present, in questionnaire order.
    pub fn section_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.survey.is_some() {
            names.push("survey");
        }
        if self.demographics.is_some() {
            names.push("demographics");
        }
        if self.medical_history.is_some() {
            names.push("medical_history");
        }
        if self.symptoms.is_some() {
            names.push("symptoms");
        }
        if self.research.is_some() {
            names.push("research");
        }
        names
    }

    pub fn to_json(&self) -> Result<serde_json::Value, CoreError> {
        Ok(serde_json::to_value(self)?)
    }
}
