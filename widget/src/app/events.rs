//! # Application Events
//!
//! Event types carrying async task results from controller operations back
//! to the frame loop. The rendering sink forwards every controller-side UI
//! obligation as one of these.

use crate::core::{NoticeKind, ProviderStatus, RenderedMessage};
use shared::dto::chat::ChatHistoryResponse;
use std::path::PathBuf;

/// Async task results sent to the main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A transcript entry was produced (echo, reply, or error message)
    MessageRendered(RenderedMessage),
    /// A transcript entry was withdrawn (retry/dismiss of a failed send)
    MessageRetracted(String),
    /// Transcript reset to the greeting state
    ConversationReset,
    /// Toast to surface outside the transcript
    NotificationRaised(NoticeKind, String),
    /// A send entered or left flight
    BusyChanged(bool),
    /// Provider availability badge update
    ProviderStatusChanged(ProviderStatus),
    /// History fetch completed
    HistoryLoaded(Result<ChatHistoryResponse, String>),
    /// History deletion completed
    HistoryDeleted(Result<(), String>),
    /// History export finished (path written on success)
    ExportFinished(Result<PathBuf, String>),
}
