use std::env;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use healbuddy_bedrock::collaborator::BedrockCollaborator;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
    let model_id = env::var("HEALBUDDY_MODEL_ID")
        .unwrap_or_else(|_| "us.anthropic.claude-sonnet-4-20250514".to_string());
    let augment_timeout_ms: u64 = env::var("HEALBUDDY_AUGMENT_TIMEOUT_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(2_500);
    let augment_enabled = env::var("HEALBUDDY_AUGMENT").map(|v| v != "off").unwrap_or(true);

    let bedrock = if augment_enabled {
        Some(healbuddy_bedrock::client::build_client_with_region(&region).await)
    } else {
        tracing::info!("HEALBUDDY_AUGMENT=off, running deterministic-only");
        None
    };

    let collaborator = bedrock
        .clone()
        .map(|client| Arc::new(BedrockCollaborator::new(client, model_id.clone())));

    let state = AppState {
        bedrock,
        collaborator,
        model_id,
        augment_timeout: Duration::from_millis(augment_timeout_ms),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Conversation routes carry a bearer identity for audit correlation.
    let conversation = Router::new()
        .route("/screenings/start", post(routes::session::start_screening))
        .route(
            "/screenings/advance",
            post(routes::session::advance_screening),
        )
        .route(
            "/screenings/feedback",
            post(routes::session::screening_feedback),
        )
        .route("/companion", post(routes::companion::companion_turn))
        .layer(axum_mw::from_fn(middleware::auth::require_auth));

    let app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Screening schemas (no auth, public data)
        .route("/screenings", get(routes::screenings::list_screenings))
        .route(
            "/screenings/{kind}",
            get(routes::screenings::get_screening_detail),
        )
        .merge(conversation)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
