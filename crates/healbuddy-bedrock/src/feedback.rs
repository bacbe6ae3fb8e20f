//! Post-screening personalized feedback.
//!
//! Asks the model for a feedback narrative plus resource recommendations,
//! parsed from strict JSON. Advisory only: the deterministic summary has
//! already been produced by the time this runs.

use aws_sdk_bedrockruntime::Client;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use healbuddy_core::models::answer::AnswerRecord;
use healbuddy_core::models::outcome::ScoreResult;

use crate::context::build_screening_block;
use crate::converse::invoke_once;
use crate::error::BedrockError;

const FEEDBACK_SYSTEM_PROMPT: &str = "\
You are a mental health companion reviewing a completed screening. The score \
and severity are final; do not recompute them. Respond with a JSON object \
with exactly two string fields: \"feedback\" (an empathetic reflection on \
the user's answers) and \"resource_recommendations\" (one or two gentle \
suggestions, such as guided breathing exercises or peer support, formatted \
as markdown). Return only the JSON object.";

/// Feedback narrative plus resource recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalizedFeedback {
    pub feedback: String,
    pub resource_recommendations: String,
}

/// Generate personalized feedback for a completed screening.
pub async fn personalized_feedback(
    client: &Client,
    model_id: &str,
    result: &ScoreResult,
    history: &[AnswerRecord],
) -> Result<PersonalizedFeedback, BedrockError> {
    let request_id = Uuid::new_v4();
    info!(request_id = %request_id, kind = %result.kind, "generating personalized feedback");

    let user_message = format!(
        "{}\n\nScreening: {}. Total score {}, severity: {}.",
        build_screening_block(history),
        result.kind,
        result.score,
        result.severity,
    );

    let response_text = invoke_once(client, model_id, FEEDBACK_SYSTEM_PROMPT, &user_message).await?;

    let feedback: PersonalizedFeedback = serde_json::from_str(&response_text).map_err(|e| {
        BedrockError::SchemaViolation(format!(
            "failed to parse PersonalizedFeedback: {e}. Response: {response_text}"
        ))
    })?;

    info!(request_id = %request_id, "personalized feedback complete");

    Ok(feedback)
}
