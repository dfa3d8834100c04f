use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Redirect, Response};
use inclusa_audit::{AuditAction, AuditEvent};
use inclusa_dashboard::export::{ExportFormat, export_participants};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

/// Download the session's participant records as an attachment.
pub async fn download_api(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ApiError> {
    download(&state, id, query.format.as_deref()).await
}

/// Same as [`download_api`], but an unknown session starts over.
pub async fn download_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ApiError> {
    match download(&state, id, query.format.as_deref()).await {
        Err(ApiError::NotFound(_)) => Ok(Redirect::to("/").into_response()),
        other => other,
    }
}

async fn download(state: &AppState, id: Uuid, format: Option<&str>) -> Result<Response, ApiError> {
    let format: ExportFormat = format.unwrap_or("csv").parse()?;
    state.simulate_delay().await;

    let participants = state
        .with_session(id, |session| session.participants().to_vec())
        .await?;
    let export = export_participants(&participants, format)?;

    AuditEvent::new(AuditAction::ExportGenerated, id)
        .with_details(serde_json::json!({
            "format": export.format.as_str(),
            "rows": participants.len(),
        }))
        .emit();

    let disposition = format!("attachment; filename=\"{}\"", export.filename);
    Ok((
        [
            (header::CONTENT_TYPE, export.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.body,
    )
        .into_response())
}
