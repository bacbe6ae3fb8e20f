//! Open-ended supportive companion conversation.
//!
//! Not a screening: nothing is sequenced and nothing is scored. The
//! caller runs the safety interrupt before this flow is reached.

use aws_sdk_bedrockruntime::Client;

use healbuddy_core::models::transcript::TranscriptMessage;

use crate::converse::invoke_conversation;
use crate::error::BedrockError;

const COMPANION_SYSTEM_PROMPT: &str = "\
You are a supportive and empathetic digital mental health assistant named Heal Buddy. \
You are not in screening mode; engage in a natural, open-ended conversation. \
Be warm, compassionate, and non-judgmental. Use short, clear, supportive \
sentences and acknowledge the user's feelings. Gently point to the resource \
hub, peer support, or a counsellor when it fits, but prioritize listening. \
Avoid medical diagnoses, and always remind users they are not alone.";

/// Shown when the model cannot be reached; a companion turn must never
/// surface a raw error mid-conversation.
pub const COMPANION_FALLBACK: &str = "I'm here with you, but I'm having trouble \
responding right now. Please try again in a moment, and remember you are not alone.";

/// Generate the companion's reply. `transcript` already includes the
/// latest user message.
pub async fn companion_reply(
    client: &Client,
    model_id: &str,
    transcript: &[TranscriptMessage],
) -> Result<String, BedrockError> {
    invoke_conversation(client, model_id, COMPANION_SYSTEM_PROMPT, transcript).await
}
