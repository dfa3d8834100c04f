use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 10;

/// Severity ratings over the past week, 1 (none) to 10 (worst), plus
/// free-form additions. Defaults match the sliders' starting positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct SymptomsInput {
    pub fatigue: u8,
    pub pain: u8,
    pub nausea: u8,
    pub appetite: u8,
    pub sleep: u8,
    pub mobility: u8,
    pub additional_symptoms: Vec<usize>,
    pub other_symptoms: String,
}

impl Default for SymptomsInput {
    fn default() -> Self {
        Self {
            fatigue: 5,
            pain: 3,
            nausea: 2,
            appetite: 4,
            sleep: 3,
            mobility: 2,
            additional_symptoms: Vec::new(),
            other_symptoms: String::new(),
        }
    }
}

impl SymptomsInput {
    pub fn ratings(&self) -> [(&'static str, u8); 6] {
        [
            ("fatigue", self.fatigue),
            ("pain", self.pain),
            ("nausea", self.nausea),
            ("appetite", self.appetite),
            ("sleep", self.sleep),
            ("mobility", self.mobility),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptoms {
    pub fatigue: u8,
    pub pain: u8,
    pub nausea: u8,
    pub appetite: u8,
    pub sleep: u8,
    pub mobility: u8,
    pub additional_symptoms: Vec<String>,
    pub other_symptoms: String,
}
