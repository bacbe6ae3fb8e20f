use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::screening::ScreeningKind;

/// A caller-persisted chat transcript.
///
/// The core never stores this; the chat client keeps it between turns and
/// may archive it once the conversation reaches a terminal step.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Transcript {
    pub id: Uuid,
    /// `None` for open-ended companion conversations.
    pub kind: Option<ScreeningKind>,
    pub messages: Vec<TranscriptMessage>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// A single message in a transcript.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TranscriptMessage {
    pub role: TranscriptRole,
    pub content: String,
    pub timestamp: jiff::Timestamp,
}

/// Role of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TranscriptRole {
    User,
    Assistant,
}
