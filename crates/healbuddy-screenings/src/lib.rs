//! healbuddy-screenings
//!
//! Screening questionnaire definitions. Pure data, no AWS dependency.
//! Defines the question list, response options, answer vocabulary, and
//! severity bands for each supported screening.

pub mod scoring;
pub mod screenings;

use healbuddy_core::models::screening::ScreeningKind;
use scoring::SeverityBand;

/// Trait implemented by each screening questionnaire.
pub trait Screening: Send + Sync {
    /// Which instrument this is.
    fn kind(&self) -> ScreeningKind;

    /// Human-readable name shown when a screening starts
    /// (e.g., "Depression (PHQ-9)").
    fn name(&self) -> &str;

    /// The fixed, ordered question list. Never changes after startup.
    fn questions(&self) -> &[&str];

    /// The canonical answer phrases offered to the user as chat buttons.
    fn response_options(&self) -> &[&str];

    /// Ordered severity bands with inclusive upper bounds. The last band's
    /// upper bound equals `max_score()`, so every score in range falls
    /// into exactly one band.
    fn severity_bands(&self) -> &[SeverityBand];

    /// Highest reachable total score (3 points per question).
    fn max_score(&self) -> u32 {
        self.questions().len() as u32 * 3
    }

    /// Map a total score to its severity label. Total over all scores:
    /// anything past `max_score()` clamps into the top band.
    fn severity_for(&self, score: u32) -> &str {
        let bands = self.severity_bands();
        match bands.iter().find(|band| score <= band.upper) {
            Some(band) => &band.label,
            None => &bands[bands.len() - 1].label,
        }
    }
}

/// Return all supported screenings in display order.
pub fn all_screenings() -> Vec<Box<dyn Screening>> {
    vec![
        Box::new(screenings::phq9::Phq9),
        Box::new(screenings::gad7::Gad7),
        Box::new(screenings::ghq12::Ghq12),
    ]
}

/// Look up the screening for a kind.
pub fn get_screening(kind: ScreeningKind) -> Box<dyn Screening> {
    match kind {
        ScreeningKind::Phq9 => Box::new(screenings::phq9::Phq9),
        ScreeningKind::Gad7 => Box::new(screenings::gad7::Gad7),
        ScreeningKind::Ghq => Box::new(screenings::ghq12::Ghq12),
    }
}
