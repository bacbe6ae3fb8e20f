use healbuddy_core::models::answer::AnswerRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A severity band: scores up to and including `upper` map to `label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub upper: u32,
    pub label: String,
}

/// Score contributed by one free-text answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerScore {
    Points(u8),
    /// The answer matched no known phrase and no bare 0-3 integer. It
    /// contributes zero; a screening always completes.
    Unscored,
}

/// Answer vocabulary, ordinal 0..=3 on both scales.
///
/// One reviewable table, matched by case-insensitive substring. Longer
/// phrases come first so "more than half the days" is not shadowed by a
/// shorter pattern.
pub const ANSWER_PATTERNS: &[(&str, u8)] = &[
    ("more than half the days", 2),
    ("nearly every day", 3),
    ("several days", 1),
    ("all the time", 3),
    ("quite often", 2),
    ("occasionally", 1),
    ("not at all", 0),
];

/// Response options for the frequency scale (PHQ-9, GAD-7).
pub const FREQUENCY_OPTIONS: &[&str] = &[
    "Not at all",
    "Several days",
    "More than half the days",
    "Nearly every day",
];

/// Response options for the intensity scale (GHQ).
pub const INTENSITY_OPTIONS: &[&str] = &[
    "Not at all",
    "Occasionally",
    "Quite often",
    "All the time",
];

/// Map a free-text answer to points.
///
/// Tries the phrase table first, then a bare integer 0-3, then
/// `Unscored`. Total: defined for any input, never fails.
pub fn score_answer(text: &str) -> AnswerScore {
    let normalized = text.to_lowercase();

    for (pattern, points) in ANSWER_PATTERNS {
        if normalized.contains(pattern) {
            return AnswerScore::Points(*points);
        }
    }

    if let Ok(value) = normalized.trim().parse::<u8>()
        && value <= 3
    {
        return AnswerScore::Points(value);
    }

    AnswerScore::Unscored
}

/// Sum of a full answer history plus how many answers could not be scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTally {
    pub total: u32,
    pub unscored: usize,
}

/// Total an answer history. Unscored answers contribute zero.
pub fn total_score(history: &[AnswerRecord]) -> ScoreTally {
    let mut tally = ScoreTally {
        total: 0,
        unscored: 0,
    };

    for record in history {
        match score_answer(&record.answer) {
            AnswerScore::Points(points) => tally.total += u32::from(points),
            AnswerScore::Unscored => tally.unscored += 1,
        }
    }

    tally
}
