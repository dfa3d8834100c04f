use std::collections::BTreeMap;

use inclusa_core::catalog::OptionCatalog;
use inclusa_core::error::CatalogError;
use inclusa_core::models::language::Language;
use inclusa_core::option_keys;
use serde::{Deserialize, Serialize};

use crate::error::LocaleError;

static EN_CATALOG: &str = include_str!("../catalog/en.json");
static ZH_CATALOG: &str = include_str!("../catalog/zh.json");

/// Texts the page chrome and validation messages cannot do without.
pub const REQUIRED_TEXTS: &[&str] = &[
    "title",
    "subtitle",
    "language_label",
    "questionnaire_tab",
    "dashboard",
    "progress",
    "complete",
    "next",
    "previous",
    "submit",
    "consent_required",
    "all_consent_required",
    "questionnaire_id_required",
    "treatment_experience_required",
    "option_out_of_range",
    "value_out_of_range",
    "malformed_field",
    "transparency_tab",
];

/// One catalog value: a display string or an ordered option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Text(String),
    Options(Vec<String>),
}

pub type Dictionary = BTreeMap<String, Entry>;

/// Both languages' catalogs, checked for symmetry at construction.
///
/// Option lists are ordinally aligned: index `i` means the same answer in
/// every language, which is what lets a language toggle keep selections.
#[derive(Debug, Clone)]
pub struct LocalizationTable {
    en: Dictionary,
    zh: Dictionary,
}

impl LocalizationTable {
    /// The catalogs compiled into the binary.
    pub fn embedded() -> Result<Self, LocaleError> {
        Self::from_sources(EN_CATALOG, ZH_CATALOG)
    }

    /// Parse and validate a pair of JSON catalogs.
    pub fn from_sources(en: &str, zh: &str) -> Result<Self, LocaleError> {
        let parse = |language, raw: &str| {
            serde_json::from_str::<Dictionary>(raw)
                .map_err(|source| LocaleError::Parse { language, source })
        };
        Self::from_dictionaries(parse(Language::En, en)?, parse(Language::Zh, zh)?)
    }

    pub fn from_dictionaries(en: Dictionary, zh: Dictionary) -> Result<Self, LocaleError> {
        let table = Self { en, zh };
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), LocaleError> {
        for (key, en_entry) in &self.en {
            let Some(zh_entry) = self.zh.get(key) else {
                return Err(LocaleError::Asymmetric {
                    key: key.clone(),
                    present_in: Language::En,
                    missing_in: Language::Zh,
                });
            };
            match (en_entry, zh_entry) {
                (Entry::Text(_), Entry::Text(_)) => {}
                (Entry::Options(en_list), Entry::Options(zh_list)) => {
                    if en_list.len() != zh_list.len() {
                        return Err(LocaleError::CardinalityMismatch {
                            key: key.clone(),
                            en: en_list.len(),
                            zh: zh_list.len(),
                        });
                    }
                }
                _ => return Err(LocaleError::KindMismatch { key: key.clone() }),
            }
        }

        if let Some(key) = self.zh.keys().find(|key| !self.en.contains_key(*key)) {
            return Err(LocaleError::Asymmetric {
                key: key.clone(),
                present_in: Language::Zh,
                missing_in: Language::En,
            });
        }

        // Symmetry holds, so checking one side is enough from here on.
        for key in option_keys::ALL {
            match self.en.get(*key) {
                Some(Entry::Options(list)) if !list.is_empty() => {}
                _ => return Err(LocaleError::MissingOptionList((*key).to_string())),
            }
        }
        for key in REQUIRED_TEXTS {
            if !matches!(self.en.get(*key), Some(Entry::Text(_))) {
                return Err(LocaleError::MissingText((*key).to_string()));
            }
        }
        Ok(())
    }

    /// The whole table for one language, as handed to the templates.
    pub fn dictionary(&self, language: Language) -> &Dictionary {
        match language {
            Language::En => &self.en,
            Language::Zh => &self.zh,
        }
    }

    fn entry(&self, language: Language, key: &str) -> Result<&Entry, CatalogError> {
        self.dictionary(language)
            .get(key)
            .ok_or_else(|| CatalogError::MissingKey {
                language,
                key: key.to_string(),
            })
    }

    pub fn text(&self, language: Language, key: &str) -> Result<&str, CatalogError> {
        match self.entry(language, key)? {
            Entry::Text(text) => Ok(text),
            Entry::Options(_) => Err(CatalogError::WrongKind {
                language,
                key: key.to_string(),
                expected: "text",
            }),
        }
    }

    pub fn options(&self, language: Language, key: &str) -> Result<&[String], CatalogError> {
        match self.entry(language, key)? {
            Entry::Options(list) => Ok(list),
            Entry::Text(_) => Err(CatalogError::WrongKind {
                language,
                key: key.to_string(),
                expected: "option list",
            }),
        }
    }

    /// Label of option `index` in list `key`, if both exist.
    pub fn option_label(
        &self,
        language: Language,
        key: &str,
        index: usize,
    ) -> Result<Option<&str>, CatalogError> {
        Ok(self.options(language, key)?.get(index).map(String::as_str))
    }
}

impl OptionCatalog for LocalizationTable {
    fn options(&self, language: Language, key: &str) -> Result<&[String], CatalogError> {
        LocalizationTable::options(self, language, key)
    }
}
