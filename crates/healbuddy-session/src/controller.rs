//! The screening session state machine.
//!
//! `start` and `advance` are pure functions of caller-supplied state.
//! Question choice, completion, scoring, and severity are always computed
//! here; the collaborator (see [`crate::augment`]) can only restate
//! phrasing.

use healbuddy_core::models::answer::AnswerRecord;
use healbuddy_core::models::outcome::ScreeningStep;
use healbuddy_core::models::screening::ScreeningKind;
use healbuddy_screenings::{get_screening, scoring};
use tracing::{debug, info};

use crate::safety;

/// Fixed disclaimer appended to every completed screening summary.
const DISCLAIMER: &str = "This screening is not a diagnosis. \
Please consult a mental health professional for a complete evaluation.";

/// Begin a screening: returns the first question. The caller stores
/// `next_index = 1` together with an empty history.
pub fn start(kind: ScreeningKind) -> ScreeningStep {
    let screening = get_screening(kind);

    info!(kind = %kind, "screening started");

    ScreeningStep::InProgress {
        question: screening.questions()[0].to_string(),
        next_index: 1,
    }
}

/// Advance a screening by one turn.
///
/// `history` already includes the latest question/answer pair;
/// `latest_answer` is additionally passed explicitly and is the sole
/// input to the safety check. Total: every input produces a step, never
/// an error.
///
/// An `index` at or past the end of the question list completes the
/// screening, so an inconsistent index from a confused caller terminates
/// gracefully instead of reaching for a question that does not exist.
pub fn advance(
    kind: ScreeningKind,
    index: usize,
    history: &[AnswerRecord],
    latest_answer: &str,
) -> ScreeningStep {
    if safety::detects_risk(latest_answer) {
        info!(kind = %kind, "safety interrupt triggered");
        return ScreeningStep::SafetyHalted {
            message: safety::CRISIS_MESSAGE.to_string(),
        };
    }

    let screening = get_screening(kind);
    let questions = screening.questions();

    if index >= questions.len() {
        return complete(kind, history);
    }

    ScreeningStep::InProgress {
        question: questions[index].to_string(),
        next_index: index + 1,
    }
}

/// Score a finished screening and build the deterministic summary.
fn complete(kind: ScreeningKind, history: &[AnswerRecord]) -> ScreeningStep {
    let screening = get_screening(kind);
    let tally = scoring::total_score(history);
    let severity = screening.severity_for(tally.total).to_string();

    if tally.unscored > 0 {
        debug!(kind = %kind, unscored = tally.unscored, "answers contributed no score");
    }

    info!(kind = %kind, score = tally.total, severity = %severity, "screening complete");

    let summary = format!(
        "Thank you for completing the {} screening. Your total score is {}. {}. {}",
        kind, tally.total, severity, DISCLAIMER,
    );

    ScreeningStep::Complete {
        kind,
        score: tally.total,
        severity,
        summary,
        feedback: None,
    }
}
