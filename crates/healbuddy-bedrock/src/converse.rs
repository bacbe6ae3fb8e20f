//! Converse API plumbing shared by the collaborator, companion, and
//! feedback flows.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::operation::converse::ConverseOutput;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use tracing::info;
use uuid::Uuid;

use healbuddy_core::models::transcript::{TranscriptMessage, TranscriptRole};

use crate::error::BedrockError;

/// Send a single user message and return the model's text reply.
pub async fn invoke_once(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
) -> Result<String, BedrockError> {
    let call_id = Uuid::new_v4();
    info!(call_id = %call_id, model = model_id, "bedrock invocation");

    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(user_message.to_string()))
        .build()
        .map_err(|e| BedrockError::Invocation(e.to_string()))?;

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(message)
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let text = response_text(&response)?;

    info!(call_id = %call_id, reply_len = text.len(), "bedrock invocation complete");

    Ok(text)
}

/// Send a multi-turn transcript and return the model's reply.
pub async fn invoke_conversation(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    messages: &[TranscriptMessage],
) -> Result<String, BedrockError> {
    let call_id = Uuid::new_v4();
    info!(call_id = %call_id, model = model_id, turns = messages.len(), "bedrock conversation");

    let mut converse_messages: Vec<Message> = Vec::with_capacity(messages.len());
    for msg in messages {
        let role = match msg.role {
            TranscriptRole::User => ConversationRole::User,
            TranscriptRole::Assistant => ConversationRole::Assistant,
        };
        let message = Message::builder()
            .role(role)
            .content(ContentBlock::Text(msg.content.clone()))
            .build()
            .map_err(|e| BedrockError::Invocation(e.to_string()))?;
        converse_messages.push(message);
    }

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .set_messages(Some(converse_messages))
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let text = response_text(&response)?;

    info!(call_id = %call_id, reply_len = text.len(), "bedrock conversation complete");

    Ok(text)
}

/// Pull the concatenated text blocks out of a Converse response.
fn response_text(response: &ConverseOutput) -> Result<String, BedrockError> {
    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    Ok(text)
}
