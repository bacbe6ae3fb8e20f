use std::sync::LazyLock;

use healbuddy_core::models::screening::ScreeningKind;

use crate::Screening;
use crate::scoring::{FREQUENCY_OPTIONS, SeverityBand};

/// GAD-7: Generalized Anxiety Disorder scale, seven items.
/// Frequency-scored 0-3 per item over the last two weeks; total 0-21.
pub struct Gad7;

const QUESTIONS: &[&str] = &[
    "Feeling nervous, anxious, or on edge?",
    "Not being able to stop or control worrying?",
    "Worrying too much about different things?",
    "Trouble relaxing?",
    "Being so restless that it is hard to sit still?",
    "Becoming easily annoyed or irritable?",
    "Feeling afraid as if something awful might happen?",
];

impl Screening for Gad7 {
    fn kind(&self) -> ScreeningKind {
        ScreeningKind::Gad7
    }

    fn name(&self) -> &str {
        "Anxiety (GAD-7)"
    }

    fn questions(&self) -> &[&str] {
        QUESTIONS
    }

    fn response_options(&self) -> &[&str] {
        FREQUENCY_OPTIONS
    }

    fn severity_bands(&self) -> &[SeverityBand] {
        static BANDS: LazyLock<Vec<SeverityBand>> = LazyLock::new(|| {
            vec![
                band(4, "Minimal anxiety"),
                band(9, "Mild anxiety"),
                band(14, "Moderate anxiety"),
                band(21, "Severe anxiety"),
            ]
        });
        &BANDS
    }
}

fn band(upper: u32, label: &str) -> SeverityBand {
    SeverityBand {
        upper,
        label: label.to_string(),
    }
}
