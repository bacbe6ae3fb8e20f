use std::sync::LazyLock;

use healbuddy_core::models::screening::ScreeningKind;

use crate::Screening;
use crate::scoring::{FREQUENCY_OPTIONS, SeverityBand};

/// PHQ-9: Patient Health Questionnaire, nine items.
/// Frequency-scored 0-3 per item over the last two weeks; total 0-27.
/// Higher = more severe.
pub struct Phq9;

const QUESTIONS: &[&str] = &[
    "Little interest or pleasure in doing things?",
    "Feeling down, depressed, or hopeless?",
    "Trouble falling or staying asleep, or sleeping too much?",
    "Feeling tired or having little energy?",
    "Poor appetite or overeating?",
    "Feeling bad about yourself - or that you are a failure or have let yourself or your family down?",
    "Trouble concentrating on things, such as reading the newspaper or watching television?",
    "Moving or speaking so slowly that other people could have noticed? Or the opposite - being so fidgety or restless that you have been moving around a lot more than usual?",
    "Thoughts that you would be better off dead, or of hurting yourself in some way?",
];

impl Screening for Phq9 {
    fn kind(&self) -> ScreeningKind {
        ScreeningKind::Phq9
    }

    fn name(&self) -> &str {
        "Depression (PHQ-9)"
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
                band(4, "Minimal symptoms of depression"),
                band(9, "Mild depression"),
                band(14, "Moderate depression"),
                band(19, "Moderately severe depression"),
                band(27, "Severe depression"),
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
