use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use inclusa_core::models::input::StepInput;
use inclusa_core::models::language::Language;
use inclusa_core::models::submission::Submission;
use inclusa_core::session::SessionSnapshot;
use inclusa_dashboard::DashboardSnapshot;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::flow;
use crate::state::{self, AppState};

pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionSnapshot>), ApiError> {
    let id = state.create_session().await?;
    let session = state.session(id).await?;
    Ok((StatusCode::CREATED, Json(session.snapshot())))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let snapshot = state.with_session(id, |session| session.snapshot()).await?;
    Ok(Json(snapshot))
}

#[derive(Deserialize)]
pub struct LanguageRequest {
    pub language: Language,
}

pub async fn set_language(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<LanguageRequest>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let session = flow::change_language(&state, id, Some(req.language)).await?;
    Ok(Json(session.snapshot()))
}

/// Answers for the current step. The `step` tag must match it.
pub async fn next(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<StepInput>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let session = flow::advance(&state, id, |_| Ok(input)).await?;
    Ok(Json(session.snapshot()))
}

pub async fn previous(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let session = flow::go_back(&state, id).await?;
    Ok(Json(session.snapshot()))
}

pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Submission>, ApiError> {
    let (submission, _) = flow::submit(&state, id).await?;
    Ok(Json(submission))
}

pub async fn dashboard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DashboardSnapshot>, ApiError> {
    let today = state::today();
    let snapshot = state
        .with_session(id, |session| {
            DashboardSnapshot::from_records(session.participants(), today)
        })
        .await?;
    Ok(Json(snapshot))
}
