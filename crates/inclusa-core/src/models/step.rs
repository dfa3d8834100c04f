use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The six screens of the questionnaire, in order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WizardStep {
    #[default]
    Consent,
    Demographics,
    MedicalHistory,
    Symptoms,
    Research,
    Completion,
}

impl WizardStep {
    pub const ALL: [WizardStep; 6] = [
        WizardStep::Consent,
        WizardStep::Demographics,
        WizardStep::MedicalHistory,
        WizardStep::Symptoms,
        WizardStep::Research,
        WizardStep::Completion,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<WizardStep> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<WizardStep> {
        Self::from_index(self.index() + 1)
    }

    /// Previous is offered on the four data-entry steps only.
    pub fn allows_previous(self) -> bool {
        matches!(
            self,
            WizardStep::Demographics
                | WizardStep::MedicalHistory
                | WizardStep::Symptoms
                | WizardStep::Research
        )
    }

    pub fn previous(self) -> Option<WizardStep> {
        if self.allows_previous() {
            Self::from_index(self.index() - 1)
        } else {
            None
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            WizardStep::Consent => "consent",
            WizardStep::Demographics => "demographics",
            WizardStep::MedicalHistory => "medical_history",
            WizardStep::Symptoms => "symptoms",
            WizardStep::Research => "research",
            WizardStep::Completion => "completion",
        }
    }

    /// Share of the flow already behind the participant, 0 at consent and
    /// 100 at completion.
    pub fn progress_percent(self) -> f64 {
        (self.index() * 100) as f64 / (Self::COUNT - 1) as f64
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
