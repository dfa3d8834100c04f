use inclusa_audit::{AuditAction, AuditEvent};
use inclusa_core::models::submission::Submission;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("submission sink unavailable: {0}")]
    Unavailable(String),
}

/// Destination of confirmed submissions.
pub trait SubmissionSink: Send + Sync {
    fn record(&self, session_id: Uuid, submission: &Submission) -> Result<(), SinkError>;
}

/// Records each submission as an audit event. Answers are not persisted.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn record(&self, session_id: Uuid, submission: &Submission) -> Result<(), SinkError> {
        AuditEvent::new(AuditAction::SubmissionRecorded, session_id)
            .with_details(serde_json::json!({
                "questionnaire_id": submission.questionnaire_id,
                "submitted_at": submission.submitted_at.to_string(),
                "sections": submission.form_data.section_names(),
            }))
            .emit();
        Ok(())
    }
}
