//! Screening context builder for collaborator prompts.
//!
//! Assembles the answered turns into a structured block prepended to the
//! user message, so the model sees where the conversation stands without
//! being allowed to steer it.

use healbuddy_core::models::answer::AnswerRecord;

/// Build a structured context block from the answered turns.
///
/// Returns an XML-style block. If `history` is empty, returns an empty
/// string (nothing has been asked yet).
pub fn build_screening_block(history: &[AnswerRecord]) -> String {
    if history.is_empty() {
        return String::new();
    }

    let mut block = String::from("<screening_context>\n");

    for record in history {
        block.push_str("<turn>\n");
        block.push_str(&format!("<question>{}</question>\n", record.question));
        block.push_str(&format!("<answer>{}</answer>\n", record.answer));
        block.push_str("</turn>\n");
    }

    block.push_str("</screening_context>");
    block
}
