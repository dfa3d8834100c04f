use inclusa_core::models::language::Language;
use thiserror::Error;

/// A catalog that cannot be served. Always fatal at startup.
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("failed to parse the '{language}' catalog: {source}")]
    Parse {
        language: Language,
        #[source]
        source: serde_json::Error,
    },

    #[error("key '{key}' exists in '{present_in}' but not in '{missing_in}'")]
    Asymmetric {
        key: String,
        present_in: Language,
        missing_in: Language,
    },

    #[error("key '{key}' is text in one language and an option list in the other")]
    KindMismatch { key: String },

    #[error("option list '{key}' has {en} entries in 'en' but {zh} in 'zh'")]
    CardinalityMismatch { key: String, en: usize, zh: usize },

    #[error("required option list '{0}' is missing")]
    MissingOptionList(String),

    #[error("required text '{0}' is missing")]
    MissingText(String),
}
