use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use healbuddy_core::collaborator::{BoxFuture, Collaborator, CollaboratorError, ScreeningContext};
use healbuddy_core::models::answer::AnswerRecord;
use healbuddy_core::models::outcome::{ScoreResult, ScreeningStep};
use healbuddy_core::models::screening::ScreeningKind;
use healbuddy_session::augment::augment_step;
use healbuddy_session::controller::{advance, start};

const DEADLINE: Duration = Duration::from_millis(200);

/// Replies with a fixed string and counts invocations.
struct Canned {
    reply: String,
    calls: AtomicUsize,
}

impl Canned {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Collaborator for Canned {
    fn rephrase(
        &self,
        _question: &str,
        _context: &ScreeningContext,
    ) -> BoxFuture<'_, Result<String, CollaboratorError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.reply.clone();
        Box::pin(async move { Ok(reply) })
    }

    fn summarize(
        &self,
        _result: &ScoreResult,
        _history: &[AnswerRecord],
    ) -> BoxFuture<'_, Result<String, CollaboratorError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.reply.clone();
        Box::pin(async move { Ok(reply) })
    }
}

/// Always fails, as an unreachable model endpoint would.
struct Failing;

impl Collaborator for Failing {
    fn rephrase(
        &self,
        _question: &str,
        _context: &ScreeningContext,
    ) -> BoxFuture<'_, Result<String, CollaboratorError>> {
        Box::pin(async { Err(CollaboratorError::Unavailable("connection refused".to_string())) })
    }

    fn summarize(
        &self,
        _result: &ScoreResult,
        _history: &[AnswerRecord],
    ) -> BoxFuture<'_, Result<String, CollaboratorError>> {
        Box::pin(async { Err(CollaboratorError::Unavailable("connection refused".to_string())) })
    }
}

/// Never answers within the deadline.
struct Slow;

impl Collaborator for Slow {
    fn rephrase(
        &self,
        _question: &str,
        _context: &ScreeningContext,
    ) -> BoxFuture<'_, Result<String, CollaboratorError>> {
        Box::pin(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("too late".to_string())
        })
    }

    fn summarize(
        &self,
        _result: &ScoreResult,
        _history: &[AnswerRecord],
    ) -> BoxFuture<'_, Result<String, CollaboratorError>> {
        Box::pin(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("too late".to_string())
        })
    }
}

fn answered(kind: ScreeningKind, answers: &[&str]) -> Vec<AnswerRecord> {
    let screening = healbuddy_screenings::get_screening(kind);
    answers
        .iter()
        .enumerate()
        .map(|(i, answer)| AnswerRecord {
            question: screening.questions()[i].to_string(),
            answer: answer.to_string(),
        })
        .collect()
}

#[tokio::test]
async fn rephrase_replaces_question_but_not_index() {
    let collaborator = Canned::new("Would you say you've had trouble relaxing lately?");
    let step = start(ScreeningKind::Gad7);

    let augmented = augment_step(step, ScreeningKind::Gad7, &[], &collaborator, DEADLINE).await;

    assert_eq!(
        augmented,
        ScreeningStep::InProgress {
            question: "Would you say you've had trouble relaxing lately?".to_string(),
            next_index: 1,
        }
    );
}

#[tokio::test]
async fn empty_rephrasing_keeps_the_canonical_question() {
    let collaborator = Canned::new("   ");
    let step = start(ScreeningKind::Phq9);

    let augmented = augment_step(
        step.clone(),
        ScreeningKind::Phq9,
        &[],
        &collaborator,
        DEADLINE,
    )
    .await;

    assert_eq!(augmented, step);
}

#[tokio::test]
async fn failing_collaborator_falls_back_to_deterministic_text() {
    let step = start(ScreeningKind::Ghq);
    let augmented = augment_step(step.clone(), ScreeningKind::Ghq, &[], &Failing, DEADLINE).await;
    assert_eq!(augmented, step);
}

#[tokio::test]
async fn slow_collaborator_times_out_to_deterministic_text() {
    let step = start(ScreeningKind::Phq9);
    let augmented = augment_step(
        step.clone(),
        ScreeningKind::Phq9,
        &[],
        &Slow,
        Duration::from_millis(20),
    )
    .await;
    assert_eq!(augmented, step);
}

#[tokio::test]
async fn summarize_attaches_feedback_without_touching_the_score() {
    let history = answered(ScreeningKind::Gad7, &["Nearly every day"; 7]);
    let step = advance(ScreeningKind::Gad7, 7, &history, "Nearly every day");
    let collaborator = Canned::new("You shared a lot today, and that takes courage.");

    let augmented = augment_step(
        step,
        ScreeningKind::Gad7,
        &history,
        &collaborator,
        DEADLINE,
    )
    .await;

    match augmented {
        ScreeningStep::Complete {
            score,
            severity,
            summary,
            feedback,
            ..
        } => {
            assert_eq!(score, 21);
            assert_eq!(severity, "Severe anxiety");
            assert!(summary.contains("Your total score is 21"));
            assert_eq!(
                feedback.as_deref(),
                Some("You shared a lot today, and that takes courage.")
            );
        }
        other => panic!("expected completion, got {other:?}"),
    }
}

#[tokio::test]
async fn safety_halt_never_consults_the_collaborator() {
    let collaborator = Canned::new("should never be used");
    let history = answered(ScreeningKind::Phq9, &["Not at all"]);

    let step = advance(ScreeningKind::Phq9, 1, &history, "I want to kill myself");
    assert!(matches!(step, ScreeningStep::SafetyHalted { .. }));

    let augmented = augment_step(
        step.clone(),
        ScreeningKind::Phq9,
        &history,
        &collaborator,
        DEADLINE,
    )
    .await;

    assert_eq!(augmented, step);
    assert_eq!(collaborator.calls(), 0);
}
