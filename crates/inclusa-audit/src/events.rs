use std::fmt;

use inclusa_core::models::step::WizardStep;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    SessionStarted,
    SessionExpired,
    StepAdvanced,
    ValidationFailed,
    StepReverted,
    LanguageChanged,
    SubmissionRecorded,
    ExportGenerated,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditAction::SessionStarted => "session_started",
            AuditAction::SessionExpired => "session_expired",
            AuditAction::StepAdvanced => "step_advanced",
            AuditAction::ValidationFailed => "validation_failed",
            AuditAction::StepReverted => "step_reverted",
            AuditAction::LanguageChanged => "language_changed",
            AuditAction::SubmissionRecorded => "submission_recorded",
            AuditAction::ExportGenerated => "export_generated",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One audited session event.
///
/// Answers themselves are never logged; `details` carries only metadata
/// such as the rejected field or the export format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEvent {
    pub action: AuditAction,
    pub session_id: Uuid,
    pub step: Option<WizardStep>,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(action: AuditAction, session_id: Uuid) -> Self {
        Self {
            action,
            session_id,
            step: None,
            details: None,
        }
    }

    pub fn with_step(mut self, step: WizardStep) -> Self {
        self.step = Some(step);
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        let step = self.step.map(WizardStep::key).unwrap_or("-");
        match &self.details {
            Some(details) => info!(
                audit.action = %self.action,
                audit.session_id = %self.session_id,
                audit.step = step,
                audit.details = %details,
                "audit event"
            ),
            None => info!(
                audit.action = %self.action,
                audit.session_id = %self.session_id,
                audit.step = step,
                "audit event"
            ),
        }
    }
}
