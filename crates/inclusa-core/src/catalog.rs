use crate::error::CatalogError;
use crate::models::language::Language;

/// Source of the localized option lists behind every categorical form field.
///
/// Option lists share cardinality and ordinal meaning across languages, so
/// the wizard works on indices and resolves labels through this trait.
pub trait OptionCatalog: Send + Sync {
    fn options(&self, language: Language, key: &str) -> Result<&[String], CatalogError>;
}
