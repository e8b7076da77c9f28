//! # Chat Data Transfer Objects
//!
//! Request and response structures for the chat, history, and provider-status
//! endpoints.

use serde::{Deserialize, Serialize};

/// Chat message sent to `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
    pub user_id: String,
    pub use_llm: bool,
}

/// Bot reply returned by `POST /chat`
///
/// Only `response` is guaranteed; the metadata fields depend on how the
/// answer was produced (direct FAQ retrieval vs. LLM generation).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_question: Option<String>,
    #[serde(default)]
    pub retrieval_only: bool,
    #[serde(default)]
    pub is_new_question: bool,
}

/// Error body carried by non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Provider availability returned by `GET /llm/status`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LlmStatusResponse {
    pub current: String,
}

/// One stored interaction in the server-side history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub user_message: String,
    pub bot_response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default)]
    pub retrieval_only: bool,
}

/// History listing returned by `GET /chat/history/{user_id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatHistoryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub total_messages: usize,
    pub history: Vec<HistoryEntry>,
}

/// Download format accepted by `GET /chat/history/{user_id}/export`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Txt,
}

impl ExportFormat {
    /// Value of the `format` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Txt => "txt",
        }
    }

    /// File extension for the downloaded blob
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
