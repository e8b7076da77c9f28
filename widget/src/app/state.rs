//! # Application State Types
//!
//! All state rendered by the frame loop: the transcript, the input row, the
//! provider badge, and the history view.

use crate::core::{NoticeKind, ProviderStatus, RenderedMessage};
use shared::dto::chat::ChatHistoryResponse;

/// Initial greeting shown before any exchange
pub const GREETING: &str = "💬 Bonjour ! Comment puis-je vous aider ?";

/// Greeting shown after the transcript is cleared
pub const CLEARED_GREETING: &str = "💬 Conversation effacée. Comment puis-je vous aider ?";

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Conversation with the assistant
    Chat,
    /// Server-side history with export and deletion
    History,
}

impl Screen {
    /// All screens in tab order
    pub fn all() -> &'static [Screen] {
        &[Screen::Chat, Screen::History]
    }

    /// Screen title for the tab bar
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Chat => "Assistant",
            Screen::History => "Historique",
        }
    }
}

/// History view sub-state
#[derive(Debug, Clone, Default)]
pub struct HistoryState {
    /// Last fetched listing, if any
    pub entries: Option<ChatHistoryResponse>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Shared application state behind `Arc<RwLock<_>>`.
///
/// Written by `App::on_tick` (applying events) and by the input widgets;
/// read by the screen renderers every frame. Locks are held briefly.
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_screen: Screen,
    /// Transcript in render order
    pub messages: Vec<RenderedMessage>,
    /// Draft text in the input row
    pub input: String,
    /// Whether sends request an LLM-augmented reply
    pub use_augmented_reply: bool,
    /// A send is in flight: input row disabled, typing dots shown
    pub busy: bool,
    pub provider_status: ProviderStatus,
    pub history: HistoryState,
    /// Toasts queued for the notification manager
    pub pending_notifications: Vec<(NoticeKind, String)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_screen: Screen::Chat,
            messages: vec![greeting_message(GREETING)],
            input: String::new(),
            use_augmented_reply: true,
            busy: false,
            provider_status: ProviderStatus::Unknown,
            history: HistoryState::default(),
            pending_notifications: Vec::new(),
        }
    }
}

/// Bot-style transcript entry carrying a greeting, without reply metadata
pub fn greeting_message(text: &str) -> RenderedMessage {
    RenderedMessage {
        id: "greeting".to_string(),
        text: text.to_string(),
        is_user: false,
        meta: None,
        failed: false,
    }
}
