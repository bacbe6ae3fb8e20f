//! Self-harm risk detection.
//!
//! One reviewable pattern table, one matching pass. The check runs on the
//! latest user message before any other controller logic, on every turn,
//! companion chat included. On a match the conversation short-circuits to
//! `CRISIS_MESSAGE`; that path never waits on the collaborator.
//!
//! The list is small and English-only. Widening it (other languages, a
//! trained classifier) is a product decision, not a code one.

/// Lowercase substrings that trigger the safety interrupt.
pub const RISK_PATTERNS: &[&str] = &[
    "suicid",
    "kill myself",
    "killing myself",
    "end my life",
    "ending my life",
    "take my own life",
    "want to die",
    "wanna die",
    "self-harm",
    "self harm",
    "hurt myself",
    "hurting myself",
    "harm myself",
    "harming myself",
    "better off dead",
];

/// Fixed crisis response, returned verbatim (no model call, no
/// templating), so the riskiest path is also the most predictable one.
pub const CRISIS_MESSAGE: &str = "It sounds like you are going through a very difficult time right now. \
You don't have to face this alone, and support is available right now.\n\n\
Please reach out to the 988 Suicide & Crisis Lifeline: call or text 988, any time, day or night. \
You can also text HOME to 741741 to reach the Crisis Text Line.\n\n\
If you are in immediate danger, please call 911 or go to your nearest emergency room.";

/// Check the latest user message for self-harm risk signals.
///
/// Case-insensitive substring match. False negatives are expected; the
/// surrounding product keeps crisis resources visible elsewhere too.
pub fn detects_risk(text: &str) -> bool {
    let normalized = text.to_lowercase();
    RISK_PATTERNS
        .iter()
        .any(|pattern| normalized.contains(pattern))
}
