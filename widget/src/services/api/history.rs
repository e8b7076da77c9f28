//! # History Endpoints
//!
//! Retrieval, export, and deletion of the server-side conversation history.

use super::client::ApiClient;
use crate::core::error::{AppError, Result};
use shared::dto::chat::{ChatHistoryResponse, ExportFormat};

/// Fetch the stored history for a session.
#[tracing::instrument(skip(client))]
pub async fn fetch_history(client: &ApiClient, user_id: &str) -> Result<ChatHistoryResponse> {
    let response = client
        .client
        .get(format!("{}/chat/history/{}", client.base_url(), user_id))
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "History network error");
            AppError::Network(e.to_string())
        })?;

    if response.status().is_success() {
        response
            .json::<ChatHistoryResponse>()
            .await
            .map_err(|e| AppError::Network(format!("Failed to parse response: {e}")))
    } else {
        Err(super::server_error(response).await)
    }
}

/// Download the stored history as raw bytes in the given format.
#[tracing::instrument(skip(client))]
pub async fn export_history(
    client: &ApiClient,
    user_id: &str,
    format: ExportFormat,
) -> Result<Vec<u8>> {
    let response = client
        .client
        .get(format!(
            "{}/chat/history/{}/export",
            client.base_url(),
            user_id
        ))
        .query(&[("format", format.as_str())])
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if response.status().is_success() {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read export: {e}")))?;
        tracing::info!(bytes = bytes.len(), %format, "History export downloaded");
        Ok(bytes.to_vec())
    } else {
        Err(super::server_error(response).await)
    }
}

/// Delete the stored history for a session.
#[tracing::instrument(skip(client))]
pub async fn delete_history(client: &ApiClient, user_id: &str) -> Result<()> {
    let response = client
        .client
        .delete(format!("{}/chat/history/{}", client.base_url(), user_id))
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if response.status().is_success() {
        tracing::info!("History deleted");
        Ok(())
    } else {
        Err(super::server_error(response).await)
    }
}
