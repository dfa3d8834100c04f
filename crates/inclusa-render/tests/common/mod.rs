#![allow(dead_code)]

use inclusa_core::models::consent::ConsentRecord;
use inclusa_core::models::demographics::DemographicsInput;
use inclusa_core::models::input::StepInput;
use inclusa_core::models::language::Language;
use inclusa_core::models::medical_history::MedicalHistoryInput;
use inclusa_core::models::participant::ParticipantRecord;
use inclusa_core::models::research::Research;
use inclusa_core::models::symptoms::SymptomsInput;
use inclusa_core::session::SessionState;
use inclusa_core::wizard;
use inclusa_i18n::LocalizationTable;
use jiff::civil::{Date, date, datetime};
use uuid::Uuid;

pub fn table() -> LocalizationTable {
    LocalizationTable::embedded().expect("bundled catalogs are valid")
}

pub fn today() -> Date {
    date(2025, 6, 15)
}

pub fn participants() -> Vec<ParticipantRecord> {
    let record = |id: u32, region: &str, stage: &str, day: i8| ParticipantRecord {
        id,
        region: region.to_string(),
        gender: "女性".to_string(),
        age: 50,
        tumor_stage: stage.to_string(),
        completion_date: datetime(2025, 6, day, 10, 0, 0, 0),
    };
    vec![
        record(1, "华北", "II期", 14),
        record(2, "华北", "III期", 14),
        record(3, "华南", "II期", 15),
    ]
}

pub fn answers() -> Vec<StepInput> {
    let mut medical_history = MedicalHistoryInput::with_defaults(today());
    medical_history.treatment_experience = vec![0];
    vec![
        StepInput::Consent(ConsentRecord::all_given()),
        StepInput::Demographics(DemographicsInput::with_defaults("Q-042", today())),
        StepInput::MedicalHistory(medical_history),
        StepInput::Symptoms(SymptomsInput::default()),
        StepInput::Research(Research::default()),
    ]
}

/// A session in `language`, walked forward `steps` times.
pub fn session_at(language: Language, steps: usize) -> SessionState {
    let table = table();
    let mut session = SessionState::new(Uuid::new_v4(), participants());
    wizard::set_language(&mut session, language);
    for input in answers().into_iter().take(steps) {
        wizard::advance(&mut session, &table, input).expect("valid answers advance");
    }
    session
}
