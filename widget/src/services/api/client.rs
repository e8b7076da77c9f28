//! # API Client
//!
//! Main HTTP client for backend API communication.

use crate::core::error::Result;
use crate::core::service::ChatTransport;
use reqwest::Client;
use shared::dto::chat::{ChatHistoryResponse, ChatReply, ChatRequest, ExportFormat, LlmStatusResponse};

/// Default base URL for the chatbot backend
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the backend base URL
const API_URL_ENV: &str = "WIDGET_API_URL";

/// HTTP client for communicating with the chatbot backend.
///
/// Maintains a connection pool for efficient keep-alive reuse across the
/// chat, status, and history endpoints.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the configured backend.
    ///
    /// Reads `WIDGET_API_URL` with a localhost default. The client carries a
    /// 10 second request timeout so a hung backend resolves to a network
    /// error instead of leaving the conversation stuck in the sending state.
    pub fn new() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// Create a client against an explicit base URL (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL for API requests.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

// Implement ChatTransport trait for ApiClient
#[async_trait::async_trait]
impl ChatTransport for ApiClient {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply> {
        crate::services::api::chat::send_chat(self, request).await
    }

    async fn llm_status(&self) -> Result<LlmStatusResponse> {
        crate::services::api::chat::llm_status(self).await
    }

    async fn fetch_history(&self, user_id: &str) -> Result<ChatHistoryResponse> {
        crate::services::api::history::fetch_history(self, user_id).await
    }

    async fn export_history(&self, user_id: &str, format: ExportFormat) -> Result<Vec<u8>> {
        crate::services::api::history::export_history(self, user_id, format).await
    }

    async fn delete_history(&self, user_id: &str) -> Result<()> {
        crate::services::api::history::delete_history(self, user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = ApiClient::with_base_url("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
