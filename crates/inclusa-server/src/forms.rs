//! Decoding of the HTML step forms into typed step answers.
//!
//! Categorical widgets post the option index, multiselects repeat their
//! field name, and checkboxes post `on` only when ticked. Anything that
//! does not parse is a [`FormError`]; range and option checks stay with
//! the wizard.

use std::str::FromStr;

use inclusa_core::error::ValidationFailure;
use inclusa_core::models::consent::ConsentRecord;
use inclusa_core::models::demographics::{DemographicsInput, default_birth_date};
use inclusa_core::models::input::StepInput;
use inclusa_core::models::medical_history::MedicalHistoryInput;
use inclusa_core::models::research::{
    DataSharing, FollowUp, FutureContact, Research, ResearchChoice, SampleCollection,
};
use inclusa_core::models::step::WizardStep;
use inclusa_core::models::symptoms::SymptomsInput;
use jiff::civil::Date;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("field '{field}' has an invalid value '{value}'")]
    Invalid { field: &'static str, value: String },
}

impl From<FormError> for ValidationFailure {
    fn from(e: FormError) -> Self {
        match e {
            FormError::Invalid { field, .. } => ValidationFailure::MalformedField { field },
        }
    }
}

/// A posted form body, order and repeats preserved.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}

impl FormFields {
    /// First non-blank value of `name`.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.all(name).next()
    }

    pub fn all<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        self.pairs
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn text(&self, name: &str) -> String {
        self.first(name).unwrap_or_default().to_string()
    }

    pub fn flag(&self, name: &str) -> bool {
        self.first(name)
            .is_some_and(|value| matches!(value, "on" | "true" | "1" | "yes"))
    }

    pub fn optional<T: FromStr>(&self, name: &'static str) -> Result<Option<T>, FormError> {
        self.first(name)
            .map(|value| parse(name, value))
            .transpose()
    }

    /// Missing single-choice widgets fall back to the first option.
    pub fn index(&self, name: &'static str) -> Result<usize, FormError> {
        Ok(self.optional(name)?.unwrap_or(0))
    }

    pub fn indices(&self, name: &'static str) -> Result<Vec<usize>, FormError> {
        self.all(name).map(|value| parse(name, value)).collect()
    }

    pub fn date(&self, name: &'static str, default: Date) -> Result<Date, FormError> {
        Ok(self.optional(name)?.unwrap_or(default))
    }
}

fn parse<T: FromStr>(field: &'static str, value: &str) -> Result<T, FormError> {
    value.parse().map_err(|_| FormError::Invalid {
        field,
        value: value.to_string(),
    })
}

/// The answers posted for `step`. Completion has no form and yields `None`.
pub fn decode_step(
    step: WizardStep,
    fields: &FormFields,
    today: Date,
) -> Result<Option<StepInput>, FormError> {
    let input = match step {
        WizardStep::Consent => StepInput::Consent(ConsentRecord {
            purpose_understood: fields.flag("purpose_understood"),
            agree_to_participate: fields.flag("agree_to_participate"),
            understand_data_use: fields.flag("understand_data_use"),
            age_confirmed: fields.flag("age_confirmed"),
        }),
        WizardStep::Demographics => StepInput::Demographics(DemographicsInput {
            questionnaire_id: fields.text("questionnaire_id"),
            survey_date: fields.date("survey_date", today)?,
            survey_method: fields.index("survey_method")?,
            gender: fields.index("gender")?,
            birth_date: fields.date("birth_date", default_birth_date())?,
            education: fields.index("education")?,
            occupation: fields.index("occupation")?,
            income: fields.index("income")?,
            ethnicity: fields.index("ethnicity")?,
            residence: fields.index("residence")?,
            region: fields.index("region")?,
            accessibility_needs: fields.indices("accessibility_needs")?,
            communication_preference: fields.indices("communication_preference")?,
        }),
        WizardStep::MedicalHistory => StepInput::MedicalHistory(MedicalHistoryInput {
            diagnosis_date: fields.date("diagnosis_date", today)?,
            tumor_stage: fields.index("tumor_stage")?,
            diagnosis_location: fields.index("diagnosis_location")?,
            hepatitis_b: fields.index("hepatitis_b")?,
            hbv_antiviral_treatment: fields.optional("hbv_antiviral_treatment")?,
            hbv_duration_years: fields.optional("hbv_duration_years")?,
            hepatitis_c: fields.index("hepatitis_c")?,
            other_liver_disease: fields.indices("other_liver_disease")?,
            treatment_experience: fields.indices("treatment_experience")?,
            current_treatment: fields.index("current_treatment")?,
            current_treatment_methods: fields.indices("current_treatment_methods")?,
            current_treatment_months: fields.optional("current_treatment_months")?,
            monthly_cost: fields.optional("monthly_cost")?,
        }),
        WizardStep::Symptoms => {
            let defaults = SymptomsInput::default();
            StepInput::Symptoms(SymptomsInput {
                fatigue: fields.optional("fatigue")?.unwrap_or(defaults.fatigue),
                pain: fields.optional("pain")?.unwrap_or(defaults.pain),
                nausea: fields.optional("nausea")?.unwrap_or(defaults.nausea),
                appetite: fields.optional("appetite")?.unwrap_or(defaults.appetite),
                sleep: fields.optional("sleep")?.unwrap_or(defaults.sleep),
                mobility: fields.optional("mobility")?.unwrap_or(defaults.mobility),
                additional_symptoms: fields.indices("additional_symptoms")?,
                other_symptoms: fields.text("other_symptoms"),
            })
        }
        WizardStep::Research => StepInput::Research(Research {
            future_contact: choice::<FutureContact>(fields, "future_contact")?,
            sample_collection: choice::<SampleCollection>(fields, "sample_collection")?,
            data_sharing: choice::<DataSharing>(fields, "data_sharing")?,
            follow_up: choice::<FollowUp>(fields, "follow_up")?,
            suggestions: fields.text("suggestions"),
        }),
        WizardStep::Completion => return Ok(None),
    };
    Ok(Some(input))
}

fn choice<C: ResearchChoice + Default>(
    fields: &FormFields,
    name: &'static str,
) -> Result<C, FormError> {
    let Some(index) = fields.optional::<usize>(name)? else {
        return Ok(C::default());
    };
    C::from_index(index).ok_or_else(|| FormError::Invalid {
        field: name,
        value: index.to_string(),
    })
}
