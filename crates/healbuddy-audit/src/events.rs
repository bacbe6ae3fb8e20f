use serde::Serialize;
use tracing::info;

/// A structured audit event for screening activity.
///
/// Emitted via `tracing` so events land in CloudWatch Logs alongside the
/// request log. Events carry identifiers and counts, never answer text.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    /// Screening kind token, or "companion" for open-ended conversation.
    pub kind: String,
    pub session_id: String,
    pub user_sub: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        kind: impl Into<String>,
        session_id: impl Into<String>,
        user_sub: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            kind: kind.into(),
            session_id: session_id.into(),
            user_sub: user_sub.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        info!(
            audit.action = %self.action,
            audit.kind = %self.kind,
            audit.session_id = %self.session_id,
            audit.user_sub = %self.user_sub,
            "audit event"
        );
    }
}
