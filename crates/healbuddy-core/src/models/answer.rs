use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::screening::ScreeningKind;

/// One question/answer pair from a screening conversation.
///
/// Immutable once recorded; the ordered sequence of these pairs is the
/// only state an in-progress screening has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerRecord {
    pub question: String,
    pub answer: String,
}

/// The caller-held state of an in-progress screening.
///
/// The controller is stateless: the chat client sends this back on every
/// turn and stores the updated copy it gets in response. Consistent
/// callers keep `next_question_index` equal to `history.len()`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningState {
    pub screening_id: Uuid,
    pub kind: ScreeningKind,
    pub next_question_index: usize,
    pub history: Vec<AnswerRecord>,
}

impl ScreeningState {
    /// Whether the index is in step with the recorded history. A mismatch
    /// is a caller bug; the controller still terminates gracefully.
    pub fn is_consistent(&self) -> bool {
        self.next_question_index == self.history.len()
    }
}
