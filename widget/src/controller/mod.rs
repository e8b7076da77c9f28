//! # Conversation Controller
//!
//! Mediates every user-initiated send against the chat backend: per-session
//! identity, single-flight status guard, optimistic local echo, and
//! user-triggered retry for failed sends.
//!
//! The controller is a leaf component. It talks to the backend only through
//! [`ChatTransport`] and to the UI only through [`RenderSink`], so it can be
//! unit-tested with a scripted transport and a recording sink — no HTTP, no
//! egui.
//!
//! ## Send lifecycle
//!
//! ```text
//!  Idle ──send()──▶ Sending ──reply──▶ Idle   (render bot message)
//!                      │
//!                      └───error──▶ Error ──▶ Idle
//!                                   (store pending record,
//!                                    render error message with retry id)
//! ```
//!
//! Because `send` refuses to start unless the status is `Idle`, no two chat
//! requests are ever in flight from one controller instance, and replies are
//! naturally ordered with their requests. Retries are strictly
//! user-triggered: there is no backoff and no automatic retry.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use rand::distr::Alphanumeric;
use rand::Rng;
use shared::dto::chat::{ChatHistoryResponse, ChatRequest, ExportFormat};

use crate::core::{
    AppError, ChatTransport, MessageMeta, NoticeKind, ProviderStatus, RenderSink,
    RenderedMessage, Result,
};
use crate::utils::validation::validate_message;

/// Toast shown when the backend flags a question as unknown to the FAQ
const NEW_QUESTION_NOTICE: &str =
    "Nouvelle question détectée — elle sera ajoutée à la FAQ.";

/// Whether a send is currently in flight.
///
/// Guards against concurrent double-sends: `send` is a no-op unless the
/// status is `Idle`. `Error` is only ever held transiently while a failure
/// is being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversationStatus {
    #[default]
    Idle,
    Sending,
    Error,
}

/// Retry state kept for a message whose send attempt failed.
///
/// Keyed by message id in the pending map; destroyed on successful retry or
/// explicit dismissal.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingMessage {
    text: String,
    use_augmented_reply: bool,
}

/// Owns the send/receive/retry protocol for one conversation session.
///
/// Multiple independent controllers share no state: each has its own session
/// identity and pending-message map.
pub struct ConversationController {
    /// Opaque token correlating this process to server-side history
    session_id: String,
    status: Mutex<ConversationStatus>,
    /// Failed sends awaiting a user-triggered retry, keyed by message id
    pending: Mutex<HashMap<String, PendingMessage>>,
    next_seq: AtomicU64,
    transport: Arc<dyn ChatTransport>,
    sink: Arc<dyn RenderSink>,
}

impl ConversationController {
    /// Create a controller with a freshly generated session identity.
    pub fn new(transport: Arc<dyn ChatTransport>, sink: Arc<dyn RenderSink>) -> Self {
        let session_id = generate_session_id();
        tracing::info!(session_id = %session_id, "conversation controller created");
        Self {
            session_id,
            status: Mutex::new(ConversationStatus::Idle),
            pending: Mutex::new(HashMap::new()),
            next_seq: AtomicU64::new(0),
            transport,
            sink,
        }
    }

    /// Session identity used to correlate all requests of this conversation.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Current send status.
    pub fn status(&self) -> ConversationStatus {
        *self.status.lock()
    }

    /// Number of failed sends currently awaiting retry.
    pub fn pending_count(&self) -> usize {
        self.pending.lock().len()
    }

    /// Fetch provider status and prior history for this session.
    ///
    /// Neither failure is fatal: a failed status fetch degrades the badge to
    /// offline, a failed history fetch leaves the transcript at the greeting.
    pub async fn initialize(&self) {
        match self.transport.llm_status().await {
            Ok(status) => {
                tracing::info!(provider = %status.current, "LLM provider online");
                self.sink
                    .set_status_indicator(ProviderStatus::Online(status.current));
            }
            Err(err) => {
                tracing::warn!(error = %err, "LLM status unavailable");
                self.sink.set_status_indicator(ProviderStatus::Offline);
            }
        }

        match self.transport.fetch_history(&self.session_id).await {
            Ok(history) => {
                tracing::info!(
                    total_messages = history.total_messages,
                    "prior history fetched"
                );
                for entry in history.history {
                    self.sink.render_message(RenderedMessage::user(
                        self.next_message_id(),
                        entry.user_message,
                    ));
                    self.sink.render_message(RenderedMessage::bot(
                        self.next_message_id(),
                        entry.bot_response,
                        MessageMeta {
                            confidence: entry.confidence,
                            provider: entry.provider,
                            retrieval_only: entry.retrieval_only,
                        },
                    ));
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "history fetch failed, starting empty");
            }
        }
    }

    /// Send one user message to the backend.
    ///
    /// Preconditions: trimmed text non-empty and at most 2000 chars
    /// (violations never reach the transport and never create a retry
    /// record), and status `Idle` — a send while another is in flight is a
    /// silent no-op.
    ///
    /// Exactly one transport call is issued per accepted invocation. On
    /// failure a pending record is stored under the echoed message's id so
    /// [`Self::retry`] can re-issue it.
    pub async fn send(&self, text: &str, use_augmented_reply: bool) -> Result<()> {
        let text = text.trim();
        let validation = validate_message(text);
        if let Some(error) = validation.error {
            self.sink.render_notification(&error, NoticeKind::Warning);
            return Err(AppError::Validation(error));
        }

        {
            let mut status = self.status.lock();
            if *status != ConversationStatus::Idle {
                tracing::debug!("send ignored: a request is already in flight");
                return Ok(());
            }
            *status = ConversationStatus::Sending;
        }
        self.sink.set_busy(true);

        let message_id = self.next_message_id();
        self.sink
            .render_message(RenderedMessage::user(message_id.clone(), text.to_string()));

        let request = ChatRequest {
            message: text.to_string(),
            user_id: self.session_id.clone(),
            use_llm: use_augmented_reply,
        };

        tracing::info!(
            message_id = %message_id,
            message_len = text.len(),
            use_llm = use_augmented_reply,
            "sending chat message"
        );

        let outcome = self.transport.send_chat(&request).await;
        self.sink.set_busy(false);

        match outcome {
            Ok(reply) => {
                *self.status.lock() = ConversationStatus::Idle;
                tracing::info!(
                    message_id = %message_id,
                    provider = ?reply.provider,
                    confidence = ?reply.confidence,
                    "reply received"
                );
                self.sink.render_message(RenderedMessage::bot(
                    self.next_message_id(),
                    reply.response,
                    MessageMeta {
                        confidence: reply.confidence,
                        provider: reply.provider,
                        retrieval_only: reply.retrieval_only,
                    },
                ));
                if reply.is_new_question {
                    self.sink
                        .render_notification(NEW_QUESTION_NOTICE, NoticeKind::Info);
                }
                Ok(())
            }
            Err(err) => {
                *self.status.lock() = ConversationStatus::Error;
                self.pending.lock().insert(
                    message_id.clone(),
                    PendingMessage {
                        text: text.to_string(),
                        use_augmented_reply,
                    },
                );
                tracing::error!(
                    message_id = %message_id,
                    error = %err,
                    "send failed, retry record stored"
                );
                self.sink.render_message(RenderedMessage::error(
                    message_id.clone(),
                    format!("❌ {}", err.user_message()),
                ));
                self.sink
                    .render_notification(&err.user_message(), NoticeKind::Error);
                *self.status.lock() = ConversationStatus::Idle;
                Err(err)
            }
        }
    }

    /// Re-issue a failed send.
    ///
    /// No-op for ids without a pending record. The record is consumed
    /// regardless of the retry outcome: whatever the new `send` produces
    /// supersedes it, including a fresh record under a new id on repeat
    /// failure. The stale echo and error message are retracted so the
    /// re-send renders cleanly.
    pub async fn retry(&self, message_id: &str) -> Result<()> {
        let record = self.pending.lock().remove(message_id);
        let Some(record) = record else {
            tracing::debug!(message_id, "retry ignored: no pending record");
            return Ok(());
        };

        tracing::info!(message_id, "retrying failed send");
        self.sink.retract_message(message_id);
        self.send(&record.text, record.use_augmented_reply).await
    }

    /// Drop the retry record for a failed message without re-sending it.
    pub fn dismiss(&self, message_id: &str) {
        if self.pending.lock().remove(message_id).is_some() {
            tracing::debug!(message_id, "pending record dismissed");
            self.sink.retract_message(message_id);
        }
    }

    /// Reset the local transcript to the greeting state.
    ///
    /// Server-side history is untouched. Pending records are dropped too:
    /// their retry affordances disappear with the transcript.
    pub fn clear(&self) {
        self.pending.lock().clear();
        self.sink.reset_conversation();
        tracing::info!("conversation cleared");
    }

    /// Fetch the server-side history for this session.
    pub async fn fetch_history(&self) -> Result<ChatHistoryResponse> {
        self.transport.fetch_history(&self.session_id).await
    }

    /// Download the server-side history as a blob.
    pub async fn export_history(&self, format: ExportFormat) -> Result<Vec<u8>> {
        self.transport.export_history(&self.session_id, format).await
    }

    /// Delete the server-side history for this session.
    pub async fn delete_history(&self) -> Result<()> {
        self.transport.delete_history(&self.session_id).await
    }

    /// Timestamp-based unique message id
    fn next_message_id(&self) -> String {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        format!("msg-{}-{}", chrono::Utc::now().timestamp_millis(), seq)
    }
}

/// Opaque session token, `user_` plus nine random alphanumerics.
fn generate_session_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!("user_{}", suffix.to_lowercase())
}
