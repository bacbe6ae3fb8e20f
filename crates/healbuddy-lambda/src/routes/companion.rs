use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use healbuddy_audit::events::AuditEvent;
use healbuddy_bedrock::companion::{COMPANION_FALLBACK, companion_reply};
use healbuddy_core::models::transcript::{Transcript, TranscriptMessage, TranscriptRole};
use healbuddy_session::safety;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CompanionRequest {
    /// Caller-held transcript; omitted on the first turn.
    pub transcript: Option<Transcript>,
    pub message: String,
}

#[derive(Serialize)]
pub struct CompanionResponse {
    pub reply: String,
    pub safety_halted: bool,
    /// Updated transcript for the caller to persist.
    pub transcript: Transcript,
}

/// One turn of the open-ended companion conversation.
pub async fn companion_turn(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CompanionRequest>,
) -> Json<CompanionResponse> {
    let now = jiff::Timestamp::now();
    let mut transcript = req.transcript.unwrap_or_else(|| Transcript {
        id: Uuid::new_v4(),
        kind: None,
        messages: Vec::new(),
        created_at: now,
        updated_at: now,
    });

    transcript.messages.push(TranscriptMessage {
        role: TranscriptRole::User,
        content: req.message.clone(),
        timestamp: now,
    });

    AuditEvent::new(
        "companion_message",
        "companion",
        transcript.id.to_string(),
        user.sub.as_str(),
    )
    .emit();

    // The safety interrupt runs before the model is consulted, every turn.
    let (reply, safety_halted) = if safety::detects_risk(&req.message) {
        AuditEvent::new(
            "safety_interrupt",
            "companion",
            transcript.id.to_string(),
            user.sub.as_str(),
        )
        .emit();
        (safety::CRISIS_MESSAGE.to_string(), true)
    } else if let Some(client) = &state.bedrock {
        match companion_reply(client, &state.model_id, &transcript.messages).await {
            Ok(reply) => (reply, false),
            Err(error) => {
                tracing::warn!(%error, "companion reply unavailable, using fallback");
                (COMPANION_FALLBACK.to_string(), false)
            }
        }
    } else {
        (COMPANION_FALLBACK.to_string(), false)
    };

    transcript.messages.push(TranscriptMessage {
        role: TranscriptRole::Assistant,
        content: reply.clone(),
        timestamp: jiff::Timestamp::now(),
    });
    transcript.updated_at = jiff::Timestamp::now();

    Json(CompanionResponse {
        reply,
        safety_halted,
        transcript,
    })
}
