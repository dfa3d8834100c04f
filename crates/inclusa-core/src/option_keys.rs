//! Localization keys of the option lists used by the questionnaire.

pub const SURVEY_METHODS: &str = "survey_methods";
pub const GENDERS: &str = "genders";
pub const EDUCATION_LEVELS: &str = "education_levels";
pub const OCCUPATIONS: &str = "occupations";
pub const INCOME_LEVELS: &str = "income_levels";
pub const ETHNICITIES: &str = "ethnicities";
pub const RESIDENCE_TYPES: &str = "residence_types";
pub const REGIONS: &str = "regions";
pub const ACCESSIBILITY_OPTIONS: &str = "accessibility_options";
pub const COMMUNICATION_OPTIONS: &str = "communication_options";

pub const TUMOR_STAGES: &str = "tumor_stages";
pub const HOSPITAL_TYPES: &str = "hospital_types";
pub const YES_NO_UNKNOWN: &str = "yes_no_unknown";
pub const LIVER_DISEASES: &str = "liver_diseases";
pub const TREATMENTS: &str = "treatments";
pub const CURRENT_TREATMENT_METHODS: &str = "current_treatment_methods";
pub const MONTHLY_COSTS: &str = "monthly_costs";

pub const SYMPTOM_OPTIONS: &str = "symptom_options";

pub const FUTURE_CONTACT_OPTIONS: &str = "future_contact_options";
pub const SAMPLE_COLLECTION_OPTIONS: &str = "sample_collection_options";
pub const DATA_SHARING_OPTIONS: &str = "data_sharing_options";
pub const FOLLOW_UP_OPTIONS: &str = "follow_up_options";

/// Index of the affirmative answer in [`YES_NO_UNKNOWN`]. Conditional
/// follow-up fields are only collected when the parent answer is this one.
pub const AFFIRMATIVE_INDEX: usize = 0;

/// Every option list the questionnaire depends on.
pub const ALL: &[&str] = &[
    SURVEY_METHODS,
    GENDERS,
    EDUCATION_LEVELS,
    OCCUPATIONS,
    INCOME_LEVELS,
    ETHNICITIES,
    RESIDENCE_TYPES,
    REGIONS,
    ACCESSIBILITY_OPTIONS,
    COMMUNICATION_OPTIONS,
    TUMOR_STAGES,
    HOSPITAL_TYPES,
    YES_NO_UNKNOWN,
    LIVER_DISEASES,
    TREATMENTS,
    CURRENT_TREATMENT_METHODS,
    MONTHLY_COSTS,
    SYMPTOM_OPTIONS,
    FUTURE_CONTACT_OPTIONS,
    SAMPLE_COLLECTION_OPTIONS,
    DATA_SHARING_OPTIONS,
    FOLLOW_UP_OPTIONS,
];
