use std::str::FromStr;

use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use healbuddy_audit::events::AuditEvent;
use healbuddy_core::models::answer::{AnswerRecord, ScreeningState};
use healbuddy_core::models::outcome::{ScoreResult, ScreeningStep};
use healbuddy_core::models::screening::ScreeningKind;
use healbuddy_session::{augment, controller};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const RESOURCE_FALLBACK: &str = "You can explore guided exercises in the resource hub, \
connect with peer support, or find a counsellor whenever you are ready.";

#[derive(Deserialize)]
pub struct StartRequest {
    pub kind: String,
}

#[derive(Serialize)]
pub struct StartResponse {
    pub screening_id: Uuid,
    #[serde(flatten)]
    pub step: ScreeningStep,
}

/// Begin a screening conversation.
pub async fn start_screening(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<StartRequest>,
) -> Result<Json<StartResponse>, ApiError> {
    let kind = ScreeningKind::from_str(&req.kind)?;
    let screening_id = Uuid::new_v4();

    let step = controller::start(kind);
    let step = maybe_augment(&state, step, kind, &[]).await;

    AuditEvent::new(
        "screening_started",
        kind.as_str(),
        screening_id.to_string(),
        user.sub.as_str(),
    )
    .emit();

    Ok(Json(StartResponse { screening_id, step }))
}

#[derive(Deserialize)]
pub struct AdvanceRequest {
    pub screening_id: Uuid,
    pub kind: String,
    pub index: usize,
    #[serde(default)]
    pub history: Vec<AnswerRecord>,
    pub latest_answer: String,
}

/// Advance a screening by one turn.
pub async fn advance_screening(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<AdvanceRequest>,
) -> Result<Json<ScreeningStep>, ApiError> {
    let kind = ScreeningKind::from_str(&req.kind)?;

    let state_view = ScreeningState {
        screening_id: req.screening_id,
        kind,
        next_question_index: req.index,
        history: req.history.clone(),
    };
    if !state_view.is_consistent() {
        tracing::warn!(
            screening_id = %req.screening_id,
            index = req.index,
            history_len = req.history.len(),
            "caller-supplied index out of step with history"
        );
    }

    let step = controller::advance(kind, req.index, &req.history, &req.latest_answer);

    match &step {
        ScreeningStep::SafetyHalted { .. } => {
            AuditEvent::new(
                "safety_interrupt",
                kind.as_str(),
                req.screening_id.to_string(),
                user.sub.as_str(),
            )
            .emit();
        }
        ScreeningStep::Complete {
            score, severity, ..
        } => {
            AuditEvent::new(
                "screening_completed",
                kind.as_str(),
                req.screening_id.to_string(),
                user.sub.as_str(),
            )
            .with_details(serde_json::json!({ "score": score, "severity": severity }))
            .emit();
        }
        ScreeningStep::InProgress { .. } => {}
    }

    let step = maybe_augment(&state, step, kind, &req.history).await;

    Ok(Json(step))
}

#[derive(Deserialize)]
pub struct FeedbackRequest {
    pub screening_id: Uuid,
    pub result: ScoreResult,
    #[serde(default)]
    pub history: Vec<AnswerRecord>,
}

#[derive(Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
    pub resource_recommendations: String,
}

/// Personalized post-screening feedback.
///
/// Collaborator outages degrade to the deterministic summary; a finished
/// screening never turns into an error.
pub async fn screening_feedback(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<FeedbackRequest>,
) -> Json<FeedbackResponse> {
    AuditEvent::new(
        "feedback_requested",
        req.result.kind.as_str(),
        req.screening_id.to_string(),
        user.sub.as_str(),
    )
    .emit();

    if let Some(client) = &state.bedrock {
        match healbuddy_bedrock::feedback::personalized_feedback(
            client,
            &state.model_id,
            &req.result,
            &req.history,
        )
        .await
        {
            Ok(feedback) => {
                return Json(FeedbackResponse {
                    feedback: feedback.feedback,
                    resource_recommendations: feedback.resource_recommendations,
                });
            }
            Err(error) => {
                tracing::warn!(%error, "personalized feedback unavailable, returning deterministic summary");
            }
        }
    }

    Json(FeedbackResponse {
        feedback: req.result.summary.clone(),
        resource_recommendations: RESOURCE_FALLBACK.to_string(),
    })
}

/// Run collaborator augmentation when one is configured.
async fn maybe_augment(
    state: &AppState,
    step: ScreeningStep,
    kind: ScreeningKind,
    history: &[AnswerRecord],
) -> ScreeningStep {
    match &state.collaborator {
        Some(collaborator) => {
            augment::augment_step(
                step,
                kind,
                history,
                collaborator.as_ref(),
                state.augment_timeout,
            )
            .await
        }
        None => step,
    }
}
