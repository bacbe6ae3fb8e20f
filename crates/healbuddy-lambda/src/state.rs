use std::sync::Arc;
use std::time::Duration;

use aws_sdk_bedrockruntime::Client as BedrockClient;

use healbuddy_bedrock::collaborator::BedrockCollaborator;

/// Shared application state, injected into route handlers via Axum state.
///
/// `bedrock` and `collaborator` are `None` when augmentation is disabled;
/// every flow then uses its deterministic fallback.
#[derive(Clone)]
pub struct AppState {
    pub bedrock: Option<BedrockClient>,
    pub collaborator: Option<Arc<BedrockCollaborator>>,
    pub model_id: String,
    pub augment_timeout: Duration,
}
