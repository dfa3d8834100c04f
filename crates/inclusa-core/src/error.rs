use thiserror::Error;

use crate::models::language::Language;
use crate::models::step::WizardStep;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("unknown wizard step index: {0}")]
    UnknownStep(usize),
}

/// A broken static asset: the localization table does not hold what the
/// wizard or the renderer asked for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("missing localization key '{key}' for language '{language}'")]
    MissingKey { language: Language, key: String },

    #[error("localization key '{key}' for language '{language}' is not a {expected}")]
    WrongKind {
        language: Language,
        key: String,
        expected: &'static str,
    },
}

/// A user-correctable problem with the answers submitted for one step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("all four consent statements must be accepted")]
    ConsentRequired,

    #[error("questionnaire id is required")]
    MissingQuestionnaireId,

    #[error("at least one previous treatment must be selected")]
    MissingTreatmentExperience,

    #[error("{field}: option {index} is outside the {len} available options")]
    OptionOutOfRange {
        field: &'static str,
        index: usize,
        len: usize,
    },

    #[error("{field}: value {value} is outside [{min}, {max}]")]
    ValueOutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{field}: value could not be read")]
    MalformedField { field: &'static str },
}

impl ValidationFailure {
    /// Localization key of the message shown next to the rejected step.
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationFailure::ConsentRequired => "consent_required",
            ValidationFailure::MissingQuestionnaireId => "questionnaire_id_required",
            ValidationFailure::MissingTreatmentExperience => "treatment_experience_required",
            ValidationFailure::OptionOutOfRange { .. } => "option_out_of_range",
            ValidationFailure::ValueOutOfRange { .. } => "value_out_of_range",
            ValidationFailure::MalformedField { .. } => "malformed_field",
        }
    }
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationFailure),

    #[error("answers for step '{got}' submitted while the wizard is at '{expected}'")]
    StepMismatch {
        expected: WizardStep,
        got: WizardStep,
    },

    #[error("no previous step from '{0}'")]
    NoPreviousStep(WizardStep),

    #[error("submission is only possible at completion (currently at '{0}')")]
    NotAtCompletion(WizardStep),

    #[error("the questionnaire is already complete")]
    AlreadyComplete,

    #[error("the session moved on before the submission could be reopened")]
    SessionMovedOn,

    #[error("configuration error: {0}")]
    Catalog(#[from] CatalogError),
}
