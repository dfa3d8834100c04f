use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const HBV_DURATION_YEARS_MAX: u8 = 50;
pub const DEFAULT_HBV_DURATION_YEARS: u8 = 5;
pub const TREATMENT_MONTHS_MIN: u16 = 1;
pub const TREATMENT_MONTHS_MAX: u16 = 120;
pub const DEFAULT_TREATMENT_MONTHS: u16 = 6;

/// Answers as posted from the medical-history screen.
///
/// `hbv_*` fields are only read when `hepatitis_b` is the affirmative answer,
/// and `current_treatment_*`/`monthly_cost` only when `current_treatment` is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicalHistoryInput {
    pub diagnosis_date: Date,
    #[serde(default)]
    pub tumor_stage: usize,
    #[serde(default)]
    pub diagnosis_location: usize,
    #[serde(default)]
    pub hepatitis_b: usize,
    #[serde(default)]
    pub hbv_antiviral_treatment: Option<usize>,
    #[serde(default)]
    pub hbv_duration_years: Option<u8>,
    #[serde(default)]
    pub hepatitis_c: usize,
    #[serde(default)]
    pub other_liver_disease: Vec<usize>,
    #[serde(default)]
    pub treatment_experience: Vec<usize>,
    #[serde(default)]
    pub current_treatment: usize,
    #[serde(default)]
    pub current_treatment_methods: Vec<usize>,
    #[serde(default)]
    pub current_treatment_months: Option<u16>,
    #[serde(default)]
    pub monthly_cost: Option<usize>,
}

impl MedicalHistoryInput {
    pub fn with_defaults(diagnosis_date: Date) -> Self {
        Self {
            diagnosis_date,
            tumor_stage: 0,
            diagnosis_location: 0,
            hepatitis_b: 0,
            hbv_antiviral_treatment: None,
            hbv_duration_years: None,
            hepatitis_c: 0,
            other_liver_disease: Vec::new(),
            treatment_experience: Vec::new(),
            current_treatment: 0,
            current_treatment_methods: Vec::new(),
            current_treatment_months: None,
            monthly_cost: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HbvDetails {
    pub antiviral_treatment: String,
    pub duration_years: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CurrentTreatment {
    pub methods: Vec<String>,
    pub duration_months: u16,
    pub monthly_cost: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicalHistory {
    pub diagnosis_date: Date,
    pub tumor_stage: String,
    pub diagnosis_location: String,
    pub hepatitis_b: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hbv: Option<HbvDetails>,
    pub hepatitis_c: String,
    pub other_liver_disease: Vec<String>,
    pub treatment_experience: Vec<String>,
    pub current_treatment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_treatment_details: Option<CurrentTreatment>,
}
