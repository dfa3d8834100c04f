//! The six-step questionnaire flow.
//!
//! Every transition validates the complete set of answers for the current
//! step before touching the session, so a rejected step leaves the session
//! exactly as it was.

use crate::catalog::OptionCatalog;
use crate::error::{ValidationFailure, WizardError};
use crate::models::demographics::{Demographics, DemographicsInput, SurveyInfo};
use crate::models::input::StepInput;
use crate::models::language::Language;
use crate::models::medical_history::{
    CurrentTreatment, DEFAULT_HBV_DURATION_YEARS, DEFAULT_TREATMENT_MONTHS,
    HBV_DURATION_YEARS_MAX, HbvDetails, MedicalHistory, MedicalHistoryInput,
    TREATMENT_MONTHS_MAX, TREATMENT_MONTHS_MIN,
};
use crate::models::step::WizardStep;
use crate::models::submission::Submission;
use crate::models::symptoms::{RATING_MAX, RATING_MIN, Symptoms, SymptomsInput};
use crate::option_keys;
use crate::session::SessionState;

/// Validate the answers for the current step, merge them into the form
/// data, and move to the next step. Returns the new step.
pub fn advance(
    session: &mut SessionState,
    catalog: &dyn OptionCatalog,
    input: StepInput,
) -> Result<WizardStep, WizardError> {
    let current = session.step;
    let next = current.next().ok_or(WizardError::AlreadyComplete)?;

    let submitted = input.step();
    if submitted != current {
        return Err(WizardError::StepMismatch {
            expected: current,
            got: submitted,
        });
    }

    let labels = Labels {
        catalog,
        language: session.language,
    };

    match input {
        StepInput::Consent(consent) => {
            if !consent.is_complete() {
                return Err(ValidationFailure::ConsentRequired.into());
            }
            session.consent_given = true;
        }
        StepInput::Demographics(answers) => {
            let (questionnaire_id, survey, demographics) = accept_demographics(&labels, answers)?;
            session.form_data.questionnaire_id = Some(questionnaire_id);
            session.form_data.survey = Some(survey);
            session.form_data.demographics = Some(demographics);
        }
        StepInput::MedicalHistory(answers) => {
            let medical_history = accept_medical_history(&labels, answers)?;
            session.form_data.medical_history = Some(medical_history);
        }
        StepInput::Symptoms(answers) => {
            let symptoms = accept_symptoms(&labels, answers)?;
            session.form_data.symptoms = Some(symptoms);
        }
        StepInput::Research(answers) => {
            session.form_data.research = Some(answers);
        }
    }

    session.step = next;
    Ok(next)
}

/// Step back one screen. Answers already merged are kept.
pub fn go_back(session: &mut SessionState) -> Result<WizardStep, WizardError> {
    let previous = session
        .step
        .previous()
        .ok_or(WizardError::NoPreviousStep(session.step))?;
    session.step = previous;
    Ok(previous)
}

/// Confirm the final submission: hand back the complete answers and reset
/// the session to a fresh questionnaire.
pub fn submit(
    session: &mut SessionState,
    submitted_at: jiff::Timestamp,
) -> Result<Submission, WizardError> {
    if session.step != WizardStep::Completion {
        return Err(WizardError::NotAtCompletion(session.step));
    }

    let form_data = std::mem::take(&mut session.form_data);
    let submission = Submission {
        questionnaire_id: form_data.questionnaire_id.clone(),
        submitted_at,
        form_data,
    };
    session.reset();
    Ok(submission)
}

/// Undo a [`submit`] whose submission could not be recorded: back to
/// completion with the submitted answers. Refused once the session has
/// been answered again. Language and dataset are left alone.
pub fn reopen(session: &mut SessionState, submission: Submission) -> Result<(), WizardError> {
    if session.step != WizardStep::Consent || !session.form_data.is_empty() {
        return Err(WizardError::SessionMovedOn);
    }
    session.form_data = submission.form_data;
    session.consent_given = true;
    session.step = WizardStep::Completion;
    Ok(())
}

pub fn set_language(session: &mut SessionState, language: Language) {
    session.language = language;
}

/// Resolves option indices to labels in the session's language.
struct Labels<'a> {
    catalog: &'a dyn OptionCatalog,
    language: Language,
}

impl Labels<'_> {
    fn pick(&self, key: &str, field: &'static str, index: usize) -> Result<String, WizardError> {
        let options = self.catalog.options(self.language, key)?;
        options.get(index).cloned().ok_or_else(|| {
            ValidationFailure::OptionOutOfRange {
                field,
                index,
                len: options.len(),
            }
            .into()
        })
    }

    fn pick_many(
        &self,
        key: &str,
        field: &'static str,
        indices: &[usize],
    ) -> Result<Vec<String>, WizardError> {
        indices
            .iter()
            .map(|&index| self.pick(key, field, index))
            .collect()
    }
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), WizardError> {
    if value < min || value > max {
        return Err(ValidationFailure::ValueOutOfRange {
            field,
            value,
            min,
            max,
        }
        .into());
    }
    Ok(())
}

fn accept_demographics(
    labels: &Labels<'_>,
    answers: DemographicsInput,
) -> Result<(String, SurveyInfo, Demographics), WizardError> {
    let questionnaire_id = answers.questionnaire_id.trim().to_string();
    if questionnaire_id.is_empty() {
        return Err(ValidationFailure::MissingQuestionnaireId.into());
    }

    let survey = SurveyInfo {
        survey_date: answers.survey_date,
        survey_method: labels.pick(
            option_keys::SURVEY_METHODS,
            "survey_method",
            answers.survey_method,
        )?,
    };

    let demographics = Demographics {
        gender: labels.pick(option_keys::GENDERS, "gender", answers.gender)?,
        birth_date: answers.birth_date,
        education: labels.pick(option_keys::EDUCATION_LEVELS, "education", answers.education)?,
        occupation: labels.pick(option_keys::OCCUPATIONS, "occupation", answers.occupation)?,
        income: labels.pick(option_keys::INCOME_LEVELS, "income", answers.income)?,
        ethnicity: labels.pick(option_keys::ETHNICITIES, "ethnicity", answers.ethnicity)?,
        residence: labels.pick(option_keys::RESIDENCE_TYPES, "residence", answers.residence)?,
        region: labels.pick(option_keys::REGIONS, "region", answers.region)?,
        accessibility_needs: labels.pick_many(
            option_keys::ACCESSIBILITY_OPTIONS,
            "accessibility_needs",
            &answers.accessibility_needs,
        )?,
        communication_preference: labels.pick_many(
            option_keys::COMMUNICATION_OPTIONS,
            "communication_preference",
            &answers.communication_preference,
        )?,
    };

    Ok((questionnaire_id, survey, demographics))
}

fn accept_medical_history(
    labels: &Labels<'_>,
    answers: MedicalHistoryInput,
) -> Result<MedicalHistory, WizardError> {
    if answers.treatment_experience.is_empty() {
        return Err(ValidationFailure::MissingTreatmentExperience.into());
    }

    let hbv = if answers.hepatitis_b == option_keys::AFFIRMATIVE_INDEX {
        let duration_years = answers
            .hbv_duration_years
            .unwrap_or(DEFAULT_HBV_DURATION_YEARS);
        check_range(
            "hbv_duration_years",
            i64::from(duration_years),
            0,
            i64::from(HBV_DURATION_YEARS_MAX),
        )?;
        Some(HbvDetails {
            antiviral_treatment: labels.pick(
                option_keys::YES_NO_UNKNOWN,
                "hbv_antiviral_treatment",
                answers.hbv_antiviral_treatment.unwrap_or(0),
            )?,
            duration_years,
        })
    } else {
        None
    };

    let current_treatment_details =
        if answers.current_treatment == option_keys::AFFIRMATIVE_INDEX {
            let duration_months = answers
                .current_treatment_months
                .unwrap_or(DEFAULT_TREATMENT_MONTHS);
            check_range(
                "current_treatment_months",
                i64::from(duration_months),
                i64::from(TREATMENT_MONTHS_MIN),
                i64::from(TREATMENT_MONTHS_MAX),
            )?;
            Some(CurrentTreatment {
                methods: labels.pick_many(
                    option_keys::CURRENT_TREATMENT_METHODS,
                    "current_treatment_methods",
                    &answers.current_treatment_methods,
                )?,
                duration_months,
                monthly_cost: labels.pick(
                    option_keys::MONTHLY_COSTS,
                    "monthly_cost",
                    answers.monthly_cost.unwrap_or(0),
                )?,
            })
        } else {
            None
        };

    Ok(MedicalHistory {
        diagnosis_date: answers.diagnosis_date,
        tumor_stage: labels.pick(option_keys::TUMOR_STAGES, "tumor_stage", answers.tumor_stage)?,
        diagnosis_location: labels.pick(
            option_keys::HOSPITAL_TYPES,
            "diagnosis_location",
            answers.diagnosis_location,
        )?,
        hepatitis_b: labels.pick(
            option_keys::YES_NO_UNKNOWN,
            "hepatitis_b",
            answers.hepatitis_b,
        )?,
        hbv,
        hepatitis_c: labels.pick(
            option_keys::YES_NO_UNKNOWN,
            "hepatitis_c",
            answers.hepatitis_c,
        )?,
        other_liver_disease: labels.pick_many(
            option_keys::LIVER_DISEASES,
            "other_liver_disease",
            &answers.other_liver_disease,
        )?,
        treatment_experience: labels.pick_many(
            option_keys::TREATMENTS,
            "treatment_experience",
            &answers.treatment_experience,
        )?,
        current_treatment: labels.pick(
            option_keys::YES_NO_UNKNOWN,
            "current_treatment",
            answers.current_treatment,
        )?,
        current_treatment_details,
    })
}

fn accept_symptoms(
    labels: &Labels<'_>,
    answers: SymptomsInput,
) -> Result<Symptoms, WizardError> {
    for (field, value) in answers.ratings() {
        check_range(
            field,
            i64::from(value),
            i64::from(RATING_MIN),
            i64::from(RATING_MAX),
        )?;
    }

    Ok(Symptoms {
        fatigue: answers.fatigue,
        pain: answers.pain,
        nausea: answers.nausea,
        appetite: answers.appetite,
        sleep: answers.sleep,
        mobility: answers.mobility,
        additional_symptoms: labels.pick_many(
            option_keys::SYMPTOM_OPTIONS,
            "additional_symptoms",
            &answers.additional_symptoms,
        )?,
        other_symptoms: answers.other_symptoms.trim().to_string(),
    })
}
