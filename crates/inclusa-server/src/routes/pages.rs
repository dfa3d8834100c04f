//! Server-rendered questionnaire.
//!
//! Every state change is a POST answered with a redirect back to the page,
//! except a rejected or unreadable step (re-rendered with its message, 422)
//! and the final submission (acknowledgement page). Requests for an unknown
//! or expired session start a new one; transitions the current step does
//! not allow just show the page again.

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use inclusa_core::error::ValidationFailure;
use inclusa_core::models::language::Language;
use inclusa_core::session::SessionState;
use inclusa_render::view::{AcknowledgementView, PageView, Tab};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::flow;
use crate::forms::{FormFields, decode_step};
use crate::state::{self, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct TabQuery {
    #[serde(default)]
    pub tab: Tab,
}

#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub language: Option<Language>,
    #[serde(default)]
    pub tab: Tab,
}

pub async fn start(State(state): State<AppState>) -> Result<Redirect, ApiError> {
    let id = state.create_session().await?;
    Ok(Redirect::to(&page_url(id, Tab::Questionnaire)))
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TabQuery>,
) -> Result<Response, ApiError> {
    let result = match state.session(id).await {
        Ok(session) => render_page(&state, &session, query.tab, None),
        Err(e) => Err(e),
    };
    recover(id, result)
}

pub async fn toggle_language(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<LanguageForm>,
) -> Result<Response, ApiError> {
    let result = flow::change_language(&state, id, form.language)
        .await
        .map(|_| Redirect::to(&page_url(id, form.tab)).into_response());
    recover(id, result)
}

pub async fn next(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let fields = FormFields::from(pairs);
    let today = state::today();
    let result = flow::advance(&state, id, |step| {
        decode_step(step, &fields, today)?
            .ok_or_else(|| ApiError::Conflict("nothing to answer at completion".to_string()))
    })
    .await;

    let result = match result {
        Ok(_) => Ok(Redirect::to(&page_url(id, Tab::Questionnaire)).into_response()),
        Err(ApiError::Validation(failure)) => match state.session(id).await {
            Ok(session) => render_page(&state, &session, Tab::Questionnaire, Some(&failure))
                .map(|page| (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()),
            Err(e) => Err(e),
        },
        Err(e) => Err(e),
    };
    recover(id, result)
}

pub async fn previous(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let result = flow::go_back(&state, id)
        .await
        .map(|_| Redirect::to(&page_url(id, Tab::Questionnaire)).into_response());
    recover(id, result)
}

pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let result = match flow::submit(&state, id).await {
        Ok((submission, language)) => {
            AcknowledgementView::build(id, language, &state.catalog, &submission)
                .and_then(|view| state.renderer.render_acknowledgement(&view))
                .map(|html| Html(html).into_response())
                .map_err(ApiError::from)
        }
        Err(e) => Err(e),
    };
    recover(id, result)
}

fn render_page(
    state: &AppState,
    session: &SessionState,
    tab: Tab,
    error: Option<&ValidationFailure>,
) -> Result<Response, ApiError> {
    let view = PageView::build(session, &state.catalog, tab, error, state::today())?;
    let html = state.renderer.render_page(&view)?;
    Ok(Html(html).into_response())
}

/// Map lookup and step-order errors onto navigation.
fn recover(id: Uuid, result: Result<Response, ApiError>) -> Result<Response, ApiError> {
    match result {
        Err(ApiError::NotFound(_)) => Ok(Redirect::to("/").into_response()),
        Err(ApiError::Conflict(_)) => {
            Ok(Redirect::to(&page_url(id, Tab::Questionnaire)).into_response())
        }
        other => other,
    }
}

fn page_url(id: Uuid, tab: Tab) -> String {
    match tab {
        Tab::Questionnaire => format!("/s/{id}"),
        Tab::Dashboard => format!("/s/{id}?tab=dashboard"),
        Tab::Transparency => format!("/s/{id}?tab=transparency"),
    }
}
