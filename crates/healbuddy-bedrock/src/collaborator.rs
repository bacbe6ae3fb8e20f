//! `Collaborator` implementation backed by Bedrock.
//!
//! Prompts are phrasing-only: the system prompts forbid the model from
//! changing a question's meaning, adding questions, or revisiting a score
//! it was not asked to compute. Control flow and scoring stay in
//! healbuddy-session.

use aws_sdk_bedrockruntime::Client;

use healbuddy_core::collaborator::{
    BoxFuture, Collaborator, CollaboratorError, ScreeningContext,
};
use healbuddy_core::models::answer::AnswerRecord;
use healbuddy_core::models::outcome::ScoreResult;

use crate::context::build_screening_block;
use crate::converse::invoke_once;
use crate::error::BedrockError;

const REPHRASE_SYSTEM_PROMPT: &str = "\
You are a supportive mental health assistant conducting a structured screening. \
Restate the screening question you are given in a warm, conversational tone. \
Keep the clinical meaning exactly as written, ask about the same time period, \
and return a single question with no preamble or commentary.";

const SUMMARIZE_SYSTEM_PROMPT: &str = "\
You are a supportive mental health assistant. The user has just completed a \
screening; the score and severity were computed separately and are final. \
Write a short, empathetic reflection on their answers. Do not change, \
re-derive, or second-guess the score or severity, do not diagnose, and \
remind them they are not alone.";

/// A Bedrock-backed phrasing collaborator.
#[derive(Debug, Clone)]
pub struct BedrockCollaborator {
    client: Client,
    model_id: String,
}

impl BedrockCollaborator {
    pub fn new(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }
}

impl Collaborator for BedrockCollaborator {
    fn rephrase(
        &self,
        question: &str,
        context: &ScreeningContext,
    ) -> BoxFuture<'_, Result<String, CollaboratorError>> {
        let user_message = format!(
            "Screening: {} (question {} of {}).\nQuestion to restate: {}",
            context.screening_name, context.question_number, context.total_questions, question,
        );

        Box::pin(async move {
            invoke_once(
                &self.client,
                &self.model_id,
                REPHRASE_SYSTEM_PROMPT,
                &user_message,
            )
            .await
            .map_err(CollaboratorError::from)
        })
    }

    fn summarize(
        &self,
        result: &ScoreResult,
        history: &[AnswerRecord],
    ) -> BoxFuture<'_, Result<String, CollaboratorError>> {
        let user_message = format!(
            "{}\n\nScreening: {}. Total score {}, severity: {}.\nWrite the reflection now.",
            build_screening_block(history),
            result.kind,
            result.score,
            result.severity,
        );

        Box::pin(async move {
            invoke_once(
                &self.client,
                &self.model_id,
                SUMMARIZE_SYSTEM_PROMPT,
                &user_message,
            )
            .await
            .map_err(CollaboratorError::from)
        })
    }
}

impl From<BedrockError> for CollaboratorError {
    fn from(error: BedrockError) -> Self {
        match error {
            BedrockError::ResponseParse(msg) | BedrockError::SchemaViolation(msg) => {
                CollaboratorError::InvalidResponse(msg)
            }
            other => CollaboratorError::Unavailable(other.to_string()),
        }
    }
}
