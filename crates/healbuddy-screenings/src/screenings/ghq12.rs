use std::sync::LazyLock;

use healbuddy_core::models::screening::ScreeningKind;

use crate::Screening;
use crate::scoring::{INTENSITY_OPTIONS, SeverityBand};

/// GHQ: General Health Questionnaire, twelve items.
/// Intensity-scored 0-3 per item; total 0-36. Screens recent general
/// psychological well-being rather than a single disorder.
pub struct Ghq12;

const QUESTIONS: &[&str] = &[
    "Been able to concentrate on whatever you're doing?",
    "Lost much sleep over worry?",
    "Felt that you were playing a useful part in things?",
    "Felt capable of making decisions about things?",
    "Felt constantly under strain?",
    "Felt you couldn't overcome your difficulties?",
    "Been able to enjoy your normal day-to-day activities?",
    "Been able to face up to your problems?",
    "Been feeling reasonably happy, all things considered?",
    "Been losing confidence in yourself?",
    "Been thinking of yourself as worthless?",
    "Been feeling reasonably happy?",
];

impl Screening for Ghq12 {
    fn kind(&self) -> ScreeningKind {
        ScreeningKind::Ghq
    }

    fn name(&self) -> &str {
        "General Well-being (GHQ)"
    }

    fn questions(&self) -> &[&str] {
        QUESTIONS
    }

    fn response_options(&self) -> &[&str] {
        INTENSITY_OPTIONS
    }

    fn severity_bands(&self) -> &[SeverityBand] {
        static BANDS: LazyLock<Vec<SeverityBand>> = LazyLock::new(|| {
            vec![
                band(2, "Good general well-being"),
                band(6, "Mild psychological distress"),
                band(36, "Significant psychological distress"),
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
