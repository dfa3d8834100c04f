use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::form_data::FormData;
use crate::models::language::Language;
use crate::models::participant::ParticipantRecord;
use crate::models::step::WizardStep;

/// Everything one participant's visit accumulates.
///
/// Only the handlers in [`crate::wizard`] mutate it; the renderer and the
/// dashboard read it.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub(crate) id: Uuid,
    pub(crate) language: Language,
    pub(crate) step: WizardStep,
    pub(crate) form_data: FormData,
    pub(crate) consent_given: bool,
    pub(crate) participants: Vec<ParticipantRecord>,
}

impl SessionState {
    pub fn new(id: Uuid, participants: Vec<ParticipantRecord>) -> Self {
        Self {
            id,
            language: Language::default(),
            step: WizardStep::default(),
            form_data: FormData::default(),
            consent_given: false,
            participants,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form_data(&self) -> &FormData {
        &self.form_data
    }

    pub fn consent_given(&self) -> bool {
        self.consent_given
    }

    pub fn participants(&self) -> &[ParticipantRecord] {
        &self.participants
    }

    /// Back to a fresh questionnaire. Language and dataset survive.
    pub(crate) fn reset(&mut self) {
        self.step = WizardStep::default();
        self.form_data = FormData::default();
        self.consent_given = false;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            language: self.language,
            step: self.step,
            step_index: self.step.index(),
            consent_given: self.consent_given,
            form_data: self.form_data.clone(),
        }
    }
}

/// Serializable view of a session without its dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub language: Language,
    pub step: WizardStep,
    pub step_index: usize,
    pub consent_given: bool,
    pub form_data: FormData,
}
