use std::str::FromStr;

use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use healbuddy_core::models::screening::ScreeningKind;
use healbuddy_screenings::scoring::SeverityBand;
use healbuddy_screenings::{all_screenings, get_screening};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct ScreeningSummary {
    kind: ScreeningKind,
    name: String,
    total_questions: usize,
}

#[derive(Serialize)]
pub struct ScreeningDetail {
    kind: ScreeningKind,
    name: String,
    questions: Vec<String>,
    response_options: Vec<String>,
    severity_bands: Vec<SeverityBand>,
    max_score: u32,
}

pub async fn list_screenings() -> Json<Vec<ScreeningSummary>> {
    let screenings: Vec<ScreeningSummary> = all_screenings()
        .iter()
        .map(|s| ScreeningSummary {
            kind: s.kind(),
            name: s.name().to_string(),
            total_questions: s.questions().len(),
        })
        .collect();
    Json(screenings)
}

pub async fn get_screening_detail(
    Path(kind): Path<String>,
) -> Result<Json<ScreeningDetail>, ApiError> {
    let kind = ScreeningKind::from_str(&kind)
        .map_err(|_| ApiError::NotFound(format!("screening not found: {kind}")))?;
    let screening = get_screening(kind);

    Ok(Json(ScreeningDetail {
        kind,
        name: screening.name().to_string(),
        questions: screening.questions().iter().map(|q| q.to_string()).collect(),
        response_options: screening
            .response_options()
            .iter()
            .map(|o| o.to_string())
            .collect(),
        severity_bands: screening.severity_bands().to_vec(),
        max_score: screening.max_score(),
    }))
}
