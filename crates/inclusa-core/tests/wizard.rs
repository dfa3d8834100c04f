mod common;

use common::*;
use inclusa_core::error::{ValidationFailure, WizardError};
use inclusa_core::models::consent::ConsentRecord;
use inclusa_core::models::demographics::DemographicsInput;
use inclusa_core::models::form_data::FormData;
use inclusa_core::models::input::StepInput;
use inclusa_core::models::language::Language;
use inclusa_core::models::medical_history::MedicalHistoryInput;
use inclusa_core::models::research::{DataSharing, FollowUp, Research};
use inclusa_core::models::step::WizardStep;
use inclusa_core::models::symptoms::SymptomsInput;
use inclusa_core::option_keys;
use inclusa_core::wizard;

#[test]
fn new_session_starts_at_consent_with_defaults() {
    let session = new_session();
    assert_eq!(session.step(), WizardStep::Consent);
    assert_eq!(session.language(), Language::Zh);
    assert!(session.form_data().is_empty());
    assert!(!session.consent_given());
    assert_eq!(session.participants().len(), 1);
}

#[test]
fn consent_passes_only_when_all_four_flags_are_true() {
    let catalog = FixtureCatalog::new();
    for bits in 0u8..16 {
        let record = ConsentRecord {
            purpose_understood: bits & 1 != 0,
            agree_to_participate: bits & 2 != 0,
            understand_data_use: bits & 4 != 0,
            age_confirmed: bits & 8 != 0,
        };
        let mut session = new_session();
        let result = wizard::advance(&mut session, &catalog, StepInput::Consent(record));

        if bits == 0b1111 {
            assert_eq!(result.expect("all consent given"), WizardStep::Demographics);
            assert!(session.consent_given());
        } else {
            assert!(matches!(
                result,
                Err(WizardError::Validation(ValidationFailure::ConsentRequired))
            ));
            assert_eq!(session.step(), WizardStep::Consent);
            assert!(!session.consent_given());
        }
    }
}

#[test]
fn failing_guard_never_moves_forward() {
    let catalog = FixtureCatalog::new();

    let mut at_consent = session_at(0);
    let _ = wizard::advance(
        &mut at_consent,
        &catalog,
        StepInput::Consent(ConsentRecord::default()),
    );
    assert_eq!(at_consent.step(), WizardStep::Consent);

    let mut at_demographics = session_at(1);
    let before = at_demographics.form_data().clone();
    let blank_id = DemographicsInput::with_defaults("   ", today());
    let err = wizard::advance(
        &mut at_demographics,
        &catalog,
        StepInput::Demographics(blank_id),
    )
    .expect_err("blank questionnaire id is rejected");
    assert!(matches!(
        err,
        WizardError::Validation(ValidationFailure::MissingQuestionnaireId)
    ));
    assert_eq!(at_demographics.step(), WizardStep::Demographics);
    assert_eq!(at_demographics.form_data(), &before);

    let mut at_medical = session_at(2);
    let no_treatment = MedicalHistoryInput::with_defaults(today());
    let err = wizard::advance(
        &mut at_medical,
        &catalog,
        StepInput::MedicalHistory(no_treatment),
    )
    .expect_err("empty treatment experience is rejected");
    assert_eq!(
        match err {
            WizardError::Validation(failure) => failure.message_key(),
            other => panic!("unexpected error: {other}"),
        },
        "treatment_experience_required"
    );
    assert_eq!(at_medical.step(), WizardStep::MedicalHistory);

    let mut at_symptoms = session_at(3);
    let too_painful = SymptomsInput {
        pain: 11,
        ..SymptomsInput::default()
    };
    let err = wizard::advance(&mut at_symptoms, &catalog, StepInput::Symptoms(too_painful))
        .expect_err("rating above 10 is rejected");
    assert!(matches!(
        err,
        WizardError::Validation(ValidationFailure::ValueOutOfRange { field: "pain", value: 11, .. })
    ));
    assert_eq!(at_symptoms.step(), WizardStep::Symptoms);
    assert!(at_symptoms.form_data().symptoms.is_none());
}

#[test]
fn out_of_range_option_is_rejected_without_mutation() {
    let catalog = FixtureCatalog::new();
    let mut session = session_at(1);
    let mut answers = DemographicsInput::with_defaults("A001", today());
    answers.region = 9;

    let err = wizard::advance(&mut session, &catalog, StepInput::Demographics(answers))
        .expect_err("region index outside the list");
    assert!(matches!(
        err,
        WizardError::Validation(ValidationFailure::OptionOutOfRange {
            field: "region",
            index: 9,
            len: 4
        })
    ));
    assert!(session.form_data().is_empty());
}

#[test]
fn answers_for_another_step_are_refused() {
    let catalog = FixtureCatalog::new();
    let mut session = session_at(1);

    let err = wizard::advance(&mut session, &catalog, symptoms()).expect_err("wrong step");
    assert!(matches!(
        err,
        WizardError::StepMismatch {
            expected: WizardStep::Demographics,
            got: WizardStep::Symptoms
        }
    ));
    assert_eq!(session.step(), WizardStep::Demographics);
}

#[test]
fn demographics_are_stored_as_labels_in_the_active_language() {
    let catalog = FixtureCatalog::new();
    let mut session = session_at(1);
    wizard::set_language(&mut session, Language::En);

    let mut answers = DemographicsInput::with_defaults("  B042 ", today());
    answers.gender = 1;
    answers.region = 2;
    answers.accessibility_needs = vec![0, 3];
    wizard::advance(&mut session, &catalog, StepInput::Demographics(answers)).expect("advance");

    let form = session.form_data();
    assert_eq!(form.questionnaire_id.as_deref(), Some("B042"));
    let demographics = form.demographics.as_ref().expect("demographics stored");
    assert_eq!(demographics.gender, "en:genders:1");
    assert_eq!(demographics.region, "en:regions:2");
    assert_eq!(
        demographics.accessibility_needs,
        vec!["en:accessibility_options:0", "en:accessibility_options:3"]
    );
    assert_eq!(demographics.birth_date, jiff::civil::date(1980, 1, 1));
    let survey = form.survey.as_ref().expect("survey stored");
    assert_eq!(survey.survey_date, today());
    assert_eq!(survey.survey_method, "en:survey_methods:0");
}

#[test]
fn hbv_details_are_only_kept_for_an_affirmative_answer() {
    let catalog = FixtureCatalog::new();

    let mut affirmative = session_at(2);
    let mut answers = MedicalHistoryInput::with_defaults(today());
    answers.treatment_experience = vec![1];
    answers.hepatitis_b = option_keys::AFFIRMATIVE_INDEX;
    answers.hbv_duration_years = Some(12);
    wizard::advance(
        &mut affirmative,
        &catalog,
        StepInput::MedicalHistory(answers.clone()),
    )
    .expect("advance");
    let hbv = affirmative
        .form_data()
        .medical_history
        .as_ref()
        .and_then(|m| m.hbv.clone())
        .expect("hbv details kept");
    assert_eq!(hbv.duration_years, 12);
    assert_eq!(hbv.antiviral_treatment, "zh:yes_no_unknown:0");

    let mut negative = session_at(2);
    answers.hepatitis_b = 1;
    answers.current_treatment = 2;
    answers.current_treatment_months = Some(500);
    wizard::advance(&mut negative, &catalog, StepInput::MedicalHistory(answers))
        .expect("sub-fields of a negative answer are not validated");
    let medical = negative
        .form_data()
        .medical_history
        .as_ref()
        .expect("medical history stored");
    assert!(medical.hbv.is_none());
    assert!(medical.current_treatment_details.is_none());
    assert_eq!(medical.hepatitis_b, "zh:yes_no_unknown:1");
}

#[test]
fn current_treatment_defaults_apply_when_sub_fields_are_absent() {
    let catalog = FixtureCatalog::new();
    let mut session = session_at(2);
    wizard::advance(&mut session, &catalog, medical_history()).expect("advance");

    let details = session
        .form_data()
        .medical_history
        .as_ref()
        .and_then(|m| m.current_treatment_details.clone())
        .expect("affirmative current treatment keeps details");
    assert_eq!(details.duration_months, 6);
    assert_eq!(details.monthly_cost, "zh:monthly_costs:0");
    assert!(details.methods.is_empty());
}

#[test]
fn sections_accumulate_across_steps() {
    let session = session_at(5);
    assert_eq!(session.step(), WizardStep::Completion);

    let form = session.form_data();
    assert!(form.demographics.is_some());
    assert!(form.medical_history.is_some());
    assert!(form.symptoms.is_some());
    assert!(form.research.is_some());
    assert_eq!(
        form.section_names(),
        vec!["survey", "demographics", "medical_history", "symptoms", "research"]
    );
}

#[test]
fn later_steps_never_overwrite_earlier_sections() {
    let catalog = FixtureCatalog::new();
    let mut session = session_at(2);
    let demographics = session.form_data().demographics.clone();

    for input in [medical_history(), symptoms(), research()] {
        wizard::advance(&mut session, &catalog, input).expect("advance");
        assert_eq!(session.form_data().demographics, demographics);
    }
}

#[test]
fn next_then_previous_is_a_round_trip() {
    let catalog = FixtureCatalog::new();
    let answers = all_answers();

    // Research advances to completion, which offers no way back.
    for n in 1..=3 {
        let mut session = session_at(n);
        let before = session.form_data().clone();
        wizard::advance(&mut session, &catalog, answers[n].clone()).expect("advance");
        wizard::go_back(&mut session).expect("go back");

        assert_eq!(session.step().index(), n);
        // Going back keeps the section just merged; only the step moves.
        let mut expected = session.form_data().clone();
        match n {
            1 => {
                expected.questionnaire_id = None;
                expected.survey = None;
                expected.demographics = None;
            }
            2 => expected.medical_history = None,
            _ => expected.symptoms = None,
        }
        assert_eq!(expected, before);

        // Once the section exists, repeating the same answers is a no-op.
        let settled = session.form_data().clone();
        wizard::advance(&mut session, &catalog, answers[n].clone()).expect("advance");
        wizard::go_back(&mut session).expect("go back");
        assert_eq!(session.form_data(), &settled);
    }
}

#[test]
fn research_cannot_be_reopened_from_completion() {
    let catalog = FixtureCatalog::new();
    let mut session = session_at(4);
    wizard::advance(&mut session, &catalog, research()).expect("advance");
    let settled = session.form_data().clone();

    assert!(matches!(
        wizard::go_back(&mut session),
        Err(WizardError::NoPreviousStep(WizardStep::Completion))
    ));
    assert_eq!(session.step(), WizardStep::Completion);
    assert_eq!(session.form_data(), &settled);
}

#[test]
fn resubmitting_a_step_replaces_its_section_whole() {
    let catalog = FixtureCatalog::new();
    let mut session = session_at(3);
    let first = SymptomsInput {
        additional_symptoms: vec![0, 1],
        other_symptoms: "night sweats".to_string(),
        ..SymptomsInput::default()
    };
    wizard::advance(&mut session, &catalog, StepInput::Symptoms(first)).expect("advance");
    wizard::go_back(&mut session).expect("back to symptoms");

    let second = SymptomsInput {
        pain: 8,
        ..SymptomsInput::default()
    };
    wizard::advance(&mut session, &catalog, StepInput::Symptoms(second)).expect("advance again");

    let stored = session.form_data().symptoms.as_ref().expect("symptoms stored");
    assert_eq!(stored.pain, 8);
    assert!(stored.additional_symptoms.is_empty());
    assert!(stored.other_symptoms.is_empty());
}

#[test]
fn research_answers_are_stored_as_given() {
    let catalog = FixtureCatalog::new();
    let changed = Research {
        data_sharing: DataSharing::No,
        follow_up: FollowUp::DependsOnTiming,
        ..Research::default()
    };

    let mut defaults = session_at(4);
    let mut custom = session_at(4);
    wizard::advance(&mut defaults, &catalog, research()).expect("advance");
    wizard::advance(&mut custom, &catalog, StepInput::Research(changed.clone()))
        .expect("advance");

    assert_eq!(defaults.form_data().research, Some(Research::default()));
    assert_eq!(custom.form_data().research.as_ref(), Some(&changed));
}

#[test]
fn previous_is_unavailable_on_consent_and_completion() {
    let mut at_consent = session_at(0);
    assert!(matches!(
        wizard::go_back(&mut at_consent),
        Err(WizardError::NoPreviousStep(WizardStep::Consent))
    ));

    let mut at_completion = session_at(5);
    assert!(matches!(
        wizard::go_back(&mut at_completion),
        Err(WizardError::NoPreviousStep(WizardStep::Completion))
    ));
    assert_eq!(at_completion.step(), WizardStep::Completion);
}

#[test]
fn next_at_completion_is_refused() {
    let catalog = FixtureCatalog::new();
    let mut session = session_at(5);
    assert!(matches!(
        wizard::advance(&mut session, &catalog, research()),
        Err(WizardError::AlreadyComplete)
    ));
}

#[test]
fn submit_resets_session_but_keeps_dataset_and_language() {
    let mut session = session_at(5);
    wizard::set_language(&mut session, Language::En);
    let participants = session.participants().to_vec();
    let answers = session.form_data().clone();
    let now = jiff::Timestamp::from_second(1_750_000_000).expect("valid timestamp");

    let submission = wizard::submit(&mut session, now).expect("submit at completion");

    assert_eq!(submission.questionnaire_id.as_deref(), Some("A001"));
    assert_eq!(submission.submitted_at, now);
    assert_eq!(submission.form_data, answers);

    assert_eq!(session.step(), WizardStep::Consent);
    assert_eq!(session.form_data(), &FormData::default());
    assert!(!session.consent_given());
    assert_eq!(session.participants(), participants.as_slice());
    assert_eq!(session.language(), Language::En);
}

#[test]
fn submit_before_completion_is_refused() {
    let mut session = session_at(3);
    let now = jiff::Timestamp::from_second(1_750_000_000).expect("valid timestamp");
    assert!(matches!(
        wizard::submit(&mut session, now),
        Err(WizardError::NotAtCompletion(WizardStep::Symptoms))
    ));
    assert!(session.form_data().demographics.is_some());
}

#[test]
fn missing_option_list_is_a_configuration_error() {
    let catalog = FixtureCatalog::new().without(Language::Zh, option_keys::GENDERS);
    let mut session = session_at(1);
    let err = wizard::advance(&mut session, &catalog, demographics())
        .expect_err("gender list missing");
    assert!(matches!(err, WizardError::Catalog(_)));
    assert_eq!(session.step(), WizardStep::Demographics);
}

#[test]
fn reopen_restores_the_submitted_answers_at_completion() {
    let mut session = session_at(5);
    wizard::set_language(&mut session, Language::En);
    let answered = session.form_data().clone();
    let submission = wizard::submit(&mut session, jiff::Timestamp::UNIX_EPOCH).expect("submit");

    // A toggle between submit and reopen survives.
    wizard::set_language(&mut session, Language::Zh);
    wizard::reopen(&mut session, submission).expect("reopen");

    assert_eq!(session.step(), WizardStep::Completion);
    assert!(session.consent_given());
    assert_eq!(session.form_data(), &answered);
    assert_eq!(session.language(), Language::Zh);
}

#[test]
fn reopen_is_refused_once_the_questionnaire_restarted() {
    let catalog = FixtureCatalog::new();
    let mut session = session_at(5);
    let submission = wizard::submit(&mut session, jiff::Timestamp::UNIX_EPOCH).expect("submit");
    wizard::advance(&mut session, &catalog, consent()).expect("consent again");

    assert!(matches!(
        wizard::reopen(&mut session, submission),
        Err(WizardError::SessionMovedOn)
    ));
    assert_eq!(session.step(), WizardStep::Demographics);
}
