use axum::Json;
use axum::extract::{Path, State};
use inclusa_core::models::language::Language;
use inclusa_i18n::Dictionary;

use crate::error::ApiError;
use crate::state::AppState;

/// The full localization table for one language.
pub async fn get_locale(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> Result<Json<Dictionary>, ApiError> {
    let language: Language = language.parse()?;
    Ok(Json(state.catalog.dictionary(language).clone()))
}
