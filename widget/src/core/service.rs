//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and
//! modularity. The conversation controller only ever talks to these two
//! traits: [`ChatTransport`] (the backend) and [`RenderSink`] (the UI).
//!
//! The concrete transport lives in [`crate::services::api`]; the concrete
//! sink forwards to the egui layer through the app event channel.

use crate::core::error::Result;
use async_trait::async_trait;
use shared::dto::chat::{ChatHistoryResponse, ChatReply, ChatRequest, ExportFormat, LlmStatusResponse};

/// Trait for backend chat operations
///
/// This trait allows for dependency injection and mocking in tests: the
/// controller's single-flight and retry semantics are exercised against a
/// scripted implementation without any HTTP.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Post one chat message and await the bot reply
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply>;

    /// Query which LLM provider is currently serving augmented replies
    async fn llm_status(&self) -> Result<LlmStatusResponse>;

    /// Fetch the stored history for a session
    async fn fetch_history(&self, user_id: &str) -> Result<ChatHistoryResponse>;

    /// Download the stored history as a blob in the given format
    async fn export_history(&self, user_id: &str, format: ExportFormat) -> Result<Vec<u8>>;

    /// Delete the stored history for a session
    async fn delete_history(&self, user_id: &str) -> Result<()>;
}

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// Availability of the reply provider, shown as a badge in the header
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProviderStatus {
    /// Status not fetched yet
    #[default]
    Unknown,
    /// Backend reachable, provider name attached
    Online(String),
    /// Status fetch failed
    Offline,
}

/// Reply metadata rendered as badges under a bot message
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageMeta {
    pub confidence: Option<f32>,
    pub provider: Option<String>,
    pub retrieval_only: bool,
}

/// One transcript entry handed to the rendering sink
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedMessage {
    /// Unique id, referenced by retry/retract
    pub id: String,
    pub text: String,
    pub is_user: bool,
    /// Present on bot replies that carry metadata
    pub meta: Option<MessageMeta>,
    /// Error-variant message: offers a retry affordance for this id
    pub failed: bool,
}

impl RenderedMessage {
    pub fn user(id: String, text: String) -> Self {
        Self {
            id,
            text,
            is_user: true,
            meta: None,
            failed: false,
        }
    }

    pub fn bot(id: String, text: String, meta: MessageMeta) -> Self {
        Self {
            id,
            text,
            is_user: false,
            meta: Some(meta),
            failed: false,
        }
    }

    pub fn error(id: String, text: String) -> Self {
        Self {
            id,
            text,
            is_user: false,
            meta: None,
            failed: true,
        }
    }
}

/// Trait for the UI obligations the controller depends on
///
/// Implemented by the egui layer (via the app event channel) and by a
/// recording stub in controller tests. Calls must be cheap and non-blocking:
/// they run inside async tasks.
pub trait RenderSink: Send + Sync {
    /// Append a message to the transcript
    fn render_message(&self, message: RenderedMessage);

    /// Remove a previously rendered message (used when a failed send is
    /// retried or dismissed)
    fn retract_message(&self, message_id: &str);

    /// Drop the whole transcript and show the initial greeting again
    fn reset_conversation(&self);

    /// Surface a toast outside the transcript
    fn render_notification(&self, text: &str, kind: NoticeKind);

    /// Disable/enable the input row while a send is in flight
    fn set_busy(&self, busy: bool);

    /// Update the provider availability badge
    fn set_status_indicator(&self, status: ProviderStatus);
}
