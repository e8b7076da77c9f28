//! # Chat Endpoints
//!
//! Message posting and provider status.

use super::client::ApiClient;
use crate::core::error::{AppError, Result};
use shared::dto::chat::{ChatReply, ChatRequest, LlmStatusResponse};

/// Post one chat message and await the bot reply.
#[tracing::instrument(skip(client, request), fields(message_len = request.message.len(), use_llm = request.use_llm))]
pub async fn send_chat(client: &ApiClient, request: &ChatRequest) -> Result<ChatReply> {
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(format!("{}/chat", client.base_url()))
        .json(request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Chat network error");
            AppError::Network(e.to_string())
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let reply = response.json::<ChatReply>().await.map_err(|e| {
            tracing::error!(error = %e, "Chat response parse error");
            AppError::Network(format!("Failed to parse response: {e}"))
        })?;

        tracing::info!(
            duration_ms = duration.as_millis(),
            provider = ?reply.provider,
            confidence = ?reply.confidence,
            "Chat reply received"
        );
        Ok(reply)
    } else {
        let error = super::server_error(response).await;
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            error = %error,
            "Chat request rejected"
        );
        Err(error)
    }
}

/// Query which provider currently serves augmented replies.
pub async fn llm_status(client: &ApiClient) -> Result<LlmStatusResponse> {
    let response = client
        .client
        .get(format!("{}/llm/status", client.base_url()))
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if response.status().is_success() {
        response
            .json::<LlmStatusResponse>()
            .await
            .map_err(|e| AppError::Network(format!("Failed to parse response: {e}")))
    } else {
        Err(super::server_error(response).await)
    }
}
