#![allow(dead_code)]

use std::collections::HashMap;

use inclusa_core::catalog::OptionCatalog;
use inclusa_core::error::CatalogError;
use inclusa_core::models::consent::ConsentRecord;
use inclusa_core::models::demographics::DemographicsInput;
use inclusa_core::models::input::StepInput;
use inclusa_core::models::language::Language;
use inclusa_core::models::medical_history::MedicalHistoryInput;
use inclusa_core::models::participant::ParticipantRecord;
use inclusa_core::models::research::Research;
use inclusa_core::models::symptoms::SymptomsInput;
use inclusa_core::option_keys;
use inclusa_core::session::SessionState;
use inclusa_core::wizard;
use uuid::Uuid;

/// Every option list has four entries, labelled `<lang>:<key>:<index>`.
pub struct FixtureCatalog {
    lists: HashMap<(Language, String), Vec<String>>,
}

impl FixtureCatalog {
    pub fn new() -> Self {
        let mut lists = HashMap::new();
        for language in Language::ALL {
            for key in option_keys::ALL {
                let options = (0..4)
                    .map(|i| format!("{}:{key}:{i}", language.code()))
                    .collect();
                lists.insert((language, key.to_string()), options);
            }
        }
        Self { lists }
    }

    pub fn without(mut self, language: Language, key: &str) -> Self {
        self.lists.remove(&(language, key.to_string()));
        self
    }
}

impl OptionCatalog for FixtureCatalog {
    fn options(&self, language: Language, key: &str) -> Result<&[String], CatalogError> {
        self.lists
            .get(&(language, key.to_string()))
            .map(Vec::as_slice)
            .ok_or_else(|| CatalogError::MissingKey {
                language,
                key: key.to_string(),
            })
    }
}

pub fn participants() -> Vec<ParticipantRecord> {
    vec![ParticipantRecord {
        id: 1,
        region: "华北".to_string(),
        gender: "女性".to_string(),
        age: 54,
        tumor_stage: "II期".to_string(),
        completion_date: jiff::civil::datetime(2025, 6, 1, 9, 30, 0, 0),
    }]
}

pub fn new_session() -> SessionState {
    SessionState::new(Uuid::new_v4(), participants())
}

pub fn today() -> jiff::civil::Date {
    jiff::civil::date(2025, 6, 15)
}

pub fn consent() -> StepInput {
    StepInput::Consent(ConsentRecord::all_given())
}

pub fn demographics() -> StepInput {
    StepInput::Demographics(DemographicsInput::with_defaults("A001", today()))
}

pub fn medical_history() -> StepInput {
    let mut answers = MedicalHistoryInput::with_defaults(today());
    answers.treatment_experience = vec![0, 2];
    StepInput::MedicalHistory(answers)
}

pub fn symptoms() -> StepInput {
    StepInput::Symptoms(SymptomsInput::default())
}

pub fn research() -> StepInput {
    StepInput::Research(Research::default())
}

/// Valid answers for every data-entry step, in order.
pub fn all_answers() -> Vec<StepInput> {
    vec![consent(), demographics(), medical_history(), symptoms(), research()]
}

/// Walk a fresh session forward `steps` times with valid answers.
pub fn session_at(steps: usize) -> SessionState {
    let catalog = FixtureCatalog::new();
    let mut session = new_session();
    for input in all_answers().into_iter().take(steps) {
        wizard::advance(&mut session, &catalog, input).expect("valid answers advance");
    }
    session
}
