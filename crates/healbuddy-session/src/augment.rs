//! Optional collaborator augmentation.
//!
//! The deterministic step is computed first; this layer may then soften
//! question phrasing or attach a feedback narrative. A collaborator
//! failure or timeout falls back to the deterministic text: an outage
//! can never block scoring or the safety interrupt.

use std::time::Duration;

use healbuddy_core::collaborator::{Collaborator, ScreeningContext};
use healbuddy_core::models::answer::AnswerRecord;
use healbuddy_core::models::outcome::{ScoreResult, ScreeningStep};
use healbuddy_core::models::screening::ScreeningKind;
use healbuddy_screenings::get_screening;
use tokio::time::timeout;
use tracing::warn;

/// Apply collaborator phrasing to a deterministic step.
///
/// `InProgress` may get a softer question, `Complete` an advisory
/// `feedback` narrative. `next_index`, score, severity, and summary are
/// never touched, and `SafetyHalted` returns before any collaborator
/// future is created.
pub async fn augment_step(
    step: ScreeningStep,
    kind: ScreeningKind,
    history: &[AnswerRecord],
    collaborator: &dyn Collaborator,
    deadline: Duration,
) -> ScreeningStep {
    match step {
        ScreeningStep::SafetyHalted { .. } => step,

        ScreeningStep::InProgress {
            question,
            next_index,
        } => {
            let screening = get_screening(kind);
            let context = ScreeningContext {
                kind,
                screening_name: screening.name().to_string(),
                question_number: next_index,
                total_questions: screening.questions().len(),
            };

            let question = match timeout(deadline, collaborator.rephrase(&question, &context)).await
            {
                Ok(Ok(rephrased)) if !rephrased.trim().is_empty() => rephrased,
                Ok(Ok(_)) => {
                    warn!(kind = %kind, "collaborator returned empty rephrasing, using canonical question");
                    question
                }
                Ok(Err(error)) => {
                    warn!(kind = %kind, %error, "collaborator unavailable, using canonical question");
                    question
                }
                Err(_) => {
                    warn!(kind = %kind, "collaborator timed out, using canonical question");
                    question
                }
            };

            ScreeningStep::InProgress {
                question,
                next_index,
            }
        }

        ScreeningStep::Complete {
            kind: result_kind,
            score,
            severity,
            summary,
            feedback,
        } => {
            let result = ScoreResult {
                kind: result_kind,
                score,
                severity: severity.clone(),
                summary: summary.clone(),
            };

            let feedback = match timeout(deadline, collaborator.summarize(&result, history)).await {
                Ok(Ok(narrative)) if !narrative.trim().is_empty() => Some(narrative),
                Ok(Ok(_)) => feedback,
                Ok(Err(error)) => {
                    warn!(kind = %kind, %error, "collaborator unavailable, keeping deterministic summary only");
                    feedback
                }
                Err(_) => {
                    warn!(kind = %kind, "collaborator timed out, keeping deterministic summary only");
                    feedback
                }
            };

            ScreeningStep::Complete {
                kind: result_kind,
                score,
                severity,
                summary,
                feedback,
            }
        }
    }
}
