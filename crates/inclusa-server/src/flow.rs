//! Session transitions shared by the page and JSON handlers.
//!
//! Each runs under the session lock and hands back a copy of the session
//! for rendering or serialization outside it.

use inclusa_audit::{AuditAction, AuditEvent};
use inclusa_core::error::WizardError;
use inclusa_core::models::input::StepInput;
use inclusa_core::models::language::Language;
use inclusa_core::models::step::WizardStep;
use inclusa_core::models::submission::Submission;
use inclusa_core::session::SessionState;
use inclusa_core::wizard;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Decode the answers for the session's current step and advance.
///
/// A validation failure leaves the session untouched and surfaces as
/// [`ApiError::Validation`].
pub async fn advance(
    state: &AppState,
    id: Uuid,
    decode: impl FnOnce(WizardStep) -> Result<StepInput, ApiError>,
) -> Result<SessionState, ApiError> {
    let catalog = state.catalog.clone();
    state
        .with_session(id, |session| -> Result<SessionState, ApiError> {
            let from = session.step();
            let input = decode(from)?;
            match wizard::advance(session, catalog.as_ref(), input) {
                Ok(to) => {
                    AuditEvent::new(AuditAction::StepAdvanced, id)
                        .with_step(from)
                        .with_details(serde_json::json!({ "to": to.key() }))
                        .emit();
                    Ok(session.clone())
                }
                Err(WizardError::Validation(failure)) => {
                    AuditEvent::new(AuditAction::ValidationFailed, id)
                        .with_step(from)
                        .with_details(serde_json::json!({ "reason": failure.message_key() }))
                        .emit();
                    Err(ApiError::Validation(failure))
                }
                Err(e) => Err(e.into()),
            }
        })
        .await?
}

pub async fn go_back(state: &AppState, id: Uuid) -> Result<SessionState, ApiError> {
    state
        .with_session(id, |session| -> Result<SessionState, ApiError> {
            let from = session.step();
            let to = wizard::go_back(session)?;
            AuditEvent::new(AuditAction::StepReverted, id)
                .with_step(from)
                .with_details(serde_json::json!({ "to": to.key() }))
                .emit();
            Ok(session.clone())
        })
        .await?
}

/// Switch to `language`, or to the other language when `None`.
pub async fn change_language(
    state: &AppState,
    id: Uuid,
    language: Option<Language>,
) -> Result<SessionState, ApiError> {
    state
        .with_session(id, |session| {
            let from = session.language();
            let to = language.unwrap_or(from.other());
            wizard::set_language(session, to);
            AuditEvent::new(AuditAction::LanguageChanged, id)
                .with_step(session.step())
                .with_details(serde_json::json!({ "from": from, "to": to }))
                .emit();
            session.clone()
        })
        .await
}

/// Confirm the final submission and hand it to the sink. Returns the
/// submission and the language it was answered in.
///
/// If the sink refuses it the answers are reopened at completion, so the
/// participant can try again.
pub async fn submit(state: &AppState, id: Uuid) -> Result<(Submission, Language), ApiError> {
    state.simulate_delay().await;

    let (submission, language) = state
        .with_session(id, |session| -> Result<_, ApiError> {
            let submission = wizard::submit(session, jiff::Timestamp::now())?;
            Ok((submission, session.language()))
        })
        .await??;

    if let Err(e) = state.sink.record(id, &submission) {
        let reopened = state
            .with_session(id, |session| wizard::reopen(session, submission))
            .await;
        match reopened {
            Ok(Ok(())) => {}
            Ok(Err(moved_on)) => {
                tracing::warn!(session_id = %id, error = %moved_on, "submission not reopened");
            }
            Err(gone) => {
                tracing::warn!(session_id = %id, error = ?gone, "submission not reopened");
            }
        }
        return Err(e.into());
    }
    Ok((submission, language))
}
