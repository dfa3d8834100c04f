use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::consent::ConsentRecord;
use super::demographics::DemographicsInput;
use super::medical_history::MedicalHistoryInput;
use super::research::Research;
use super::step::WizardStep;
use super::symptoms::SymptomsInput;

/// The answers for one step, tagged with the step they belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "step", rename_all = "snake_case")]
#[ts(export)]
pub enum StepInput {
    Consent(ConsentRecord),
    Demographics(DemographicsInput),
    MedicalHistory(MedicalHistoryInput),
    Symptoms(SymptomsInput),
    Research(Research),
}

impl StepInput {
    pub fn step(&self) -> WizardStep {
        match self {
            StepInput::Consent(_) => WizardStep::Consent,
            StepInput::Demographics(_) => WizardStep::Demographics,
            StepInput::MedicalHistory(_) => WizardStep::MedicalHistory,
            StepInput::Symptoms(_) => WizardStep::Symptoms,
            StepInput::Research(_) => WizardStep::Research,
        }
    }
}
