//! Capability seam for the language-model collaborator.
//!
//! The controller's choice of question, completion decision, and score are
//! always computed deterministically; a `Collaborator` may only influence
//! phrasing. Methods return boxed futures for dyn compatibility.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::models::answer::AnswerRecord;
use crate::models::outcome::ScoreResult;
use crate::models::screening::ScreeningKind;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// What a collaborator is allowed to know when phrasing a question.
#[derive(Debug, Clone)]
pub struct ScreeningContext {
    pub kind: ScreeningKind,
    /// Display name, e.g. "Depression (PHQ-9)".
    pub screening_name: String,
    /// 1-based number of the question being asked.
    pub question_number: usize,
    pub total_questions: usize,
}

#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),

    #[error("collaborator returned an unusable response: {0}")]
    InvalidResponse(String),
}

/// An external language model used for phrasing only.
pub trait Collaborator: Send + Sync {
    /// Restate `question` in a softer conversational register without
    /// changing its meaning.
    fn rephrase(
        &self,
        question: &str,
        context: &ScreeningContext,
    ) -> BoxFuture<'_, Result<String, CollaboratorError>>;

    /// Produce an advisory feedback narrative for a completed screening.
    fn summarize(
        &self,
        result: &ScoreResult,
        history: &[AnswerRecord],
    ) -> BoxFuture<'_, Result<String, CollaboratorError>>;
}
