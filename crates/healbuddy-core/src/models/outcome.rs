use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::screening::ScreeningKind;

/// The deterministic result of a completed screening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub kind: ScreeningKind,
    pub score: u32,
    pub severity: String,
    pub summary: String,
}

/// One step of the screening conversation, as returned to the chat client.
///
/// Tagged by `status`, so the wire shape is `{"status": "in_progress", ...}`
/// / `"complete"` / `"safety_halted"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum ScreeningStep {
    InProgress {
        question: String,
        next_index: usize,
    },
    Complete {
        kind: ScreeningKind,
        score: u32,
        severity: String,
        summary: String,
        /// Advisory collaborator narrative. Never replaces the
        /// deterministic summary.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        feedback: Option<String>,
    },
    SafetyHalted {
        message: String,
    },
}
