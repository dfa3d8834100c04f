use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Answers as posted from the demographics screen. Categorical fields are
/// indices into the active language's option lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DemographicsInput {
    pub questionnaire_id: String,
    pub survey_date: Date,
    #[serde(default)]
    pub survey_method: usize,
    #[serde(default)]
    pub gender: usize,
    #[serde(default = "default_birth_date")]
    pub birth_date: Date,
    #[serde(default)]
    pub education: usize,
    #[serde(default)]
    pub occupation: usize,
    #[serde(default)]
    pub income: usize,
    #[serde(default)]
    pub ethnicity: usize,
    #[serde(default)]
    pub residence: usize,
    #[serde(default)]
    pub region: usize,
    #[serde(default)]
    pub accessibility_needs: Vec<usize>,
    #[serde(default)]
    pub communication_preference: Vec<usize>,
}

impl DemographicsInput {
    /// The form as first presented: every widget at its default.
    pub fn with_defaults(questionnaire_id: impl Into<String>, survey_date: Date) -> Self {
        Self {
            questionnaire_id: questionnaire_id.into(),
            survey_date,
            survey_method: 0,
            gender: 0,
            birth_date: default_birth_date(),
            education: 0,
            occupation: 0,
            income: 0,
            ethnicity: 0,
            residence: 0,
            region: 0,
            accessibility_needs: Vec::new(),
            communication_preference: Vec::new(),
        }
    }
}

pub fn default_birth_date() -> Date {
    jiff::civil::date(1980, 1, 1)
}

/// Age shown next to the birth date. Informational only, never stored.
pub fn age_in_year(birth_date: Date, year: i16) -> i16 {
    year - birth_date.year()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurveyInfo {
    pub survey_date: Date,
    pub survey_method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Demographics {
    pub gender: String,
    pub birth_date: Date,
    pub education: String,
    pub occupation: String,
    pub income: String,
    pub ethnicity: String,
    pub residence: String,
    pub region: String,
    pub accessibility_needs: Vec<String>,
    pub communication_preference: Vec<String>,
}
