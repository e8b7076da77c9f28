//! # Application Orchestrator
//!
//! The [`App`] struct wires the conversation controller to the egui frame
//! loop, following an event-driven pattern:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                Main Thread (egui)                    │
//! │  App::on_tick()  - drains the event channel          │
//! │  App::handle_*() - user actions, spawn controller ops│
//! │  State: Arc<RwLock<AppState>> read by the renderers  │
//! └───────────────▲──────────────────┬───────────────────┘
//!                 │ AppEvent          │ spawn
//!                 │ (async_channel)   ▼
//! ┌───────────────┴──────────────────────────────────────┐
//! │            Tokio runtime (TOKIO_RT)                  │
//! │  ConversationController::send / retry / initialize   │
//! │  ChannelSink forwards sink calls as AppEvents        │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Locks are held briefly: `on_tick` takes the write lock per event, the
//! renderers take short read locks per frame.

mod events;
mod shell;
mod sink;
mod state;

pub use events::AppEvent;
pub use shell::WidgetShell;
pub use sink::ChannelSink;
pub use state::{greeting_message, AppState, HistoryState, Screen, CLEARED_GREETING, GREETING};

use std::path::PathBuf;
use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::controller::ConversationController;
use crate::core::{ChatTransport, NoticeKind};
use crate::services::api::ApiClient;
use crate::utils::runtime::TOKIO_RT;
use crate::utils::validation::validate_message;
use shared::dto::chat::ExportFormat;

/// Main application orchestrator.
///
/// Owns the shared state, the event channel, and the conversation
/// controller. All user actions go through `handle_*` methods, which spawn
/// controller operations onto the Tokio runtime; results come back as
/// [`AppEvent`]s applied in [`App::on_tick`].
pub struct App {
    /// Thread-safe shared application state
    pub state: Arc<RwLock<AppState>>,
    /// Channel receiver for async task results
    pub event_rx: Receiver<AppEvent>,
    event_tx: Sender<AppEvent>,
    controller: Arc<ConversationController>,
}

impl App {
    /// Create the app against the configured backend and start
    /// initialization (provider status + prior history).
    pub fn new() -> Self {
        let app = Self::with_transport(Arc::new(ApiClient::new()));
        app.initialize();
        app
    }

    /// Create the app against an explicit transport without triggering any
    /// network traffic. Used by tests.
    pub fn with_transport(transport: Arc<dyn ChatTransport>) -> Self {
        let (event_tx, event_rx) = unbounded();
        let sink = Arc::new(ChannelSink::new(event_tx.clone()));
        let controller = Arc::new(ConversationController::new(transport, sink));

        tracing::info!(
            session_id = %controller.session_id(),
            "app state initialized - event channel created"
        );

        App {
            state: Arc::new(RwLock::new(AppState::default())),
            event_rx,
            event_tx,
            controller,
        }
    }

    /// Session identity shown in the history screen.
    pub fn session_id(&self) -> &str {
        self.controller.session_id()
    }

    /// Kick off the controller's startup fetches. Failures degrade the
    /// provider badge; they never block the UI.
    pub fn initialize(&self) {
        let controller = self.controller.clone();
        TOKIO_RT.spawn(async move {
            controller.initialize().await;
        });
    }

    /// Called every frame to apply async results to the shared state.
    ///
    /// Non-blocking: drains whatever is in the channel and returns.
    pub fn on_tick(&self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_event(event);
        }
    }

    /// Toasts queued since the last frame, in arrival order.
    pub fn take_notifications(&self) -> Vec<(NoticeKind, String)> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }

    // ========== User action handlers ==========

    /// Send the current input-row draft.
    pub fn handle_send_click(&self) {
        let (text, use_augmented_reply) = {
            let state = self.state.read();
            (state.input.trim().to_string(), state.use_augmented_reply)
        };

        // Empty drafts are ignored outright; other validation failures go
        // through the controller so the user gets the toast, and the draft
        // stays in the input row for editing
        if text.is_empty() {
            return;
        }
        if validate_message(&text).is_valid {
            self.state.write().input.clear();
        }

        let controller = self.controller.clone();
        TOKIO_RT.spawn(async move {
            let _ = controller.send(&text, use_augmented_reply).await;
        });
    }

    /// Retry the failed send rendered under `message_id`.
    pub fn handle_retry_click(&self, message_id: String) {
        let controller = self.controller.clone();
        TOKIO_RT.spawn(async move {
            let _ = controller.retry(&message_id).await;
        });
    }

    /// Drop a failed send without re-issuing it.
    pub fn handle_dismiss_click(&self, message_id: &str) {
        self.controller.dismiss(message_id);
    }

    /// Clear the transcript back to the greeting.
    pub fn handle_clear_click(&self) {
        self.controller.clear();
    }

    /// Switch screens; entering the history screen refreshes it.
    pub fn handle_screen_change(&self, screen: Screen) {
        let changed = {
            let mut state = self.state.write();
            let changed = state.current_screen != screen;
            state.current_screen = screen;
            changed
        };
        if changed && screen == Screen::History {
            self.handle_history_refresh();
        }
    }

    /// Fetch the server-side history for this session.
    pub fn handle_history_refresh(&self) {
        {
            let mut state = self.state.write();
            if state.history.loading {
                return;
            }
            state.history.loading = true;
            state.history.error = None;
        }

        let controller = self.controller.clone();
        let tx = self.event_tx.clone();
        TOKIO_RT.spawn(async move {
            let result = controller
                .fetch_history()
                .await
                .map_err(|e| e.user_message());
            let _ = tx.send(AppEvent::HistoryLoaded(result)).await;
        });
    }

    /// Delete the server-side history for this session.
    pub fn handle_history_delete(&self) {
        let controller = self.controller.clone();
        let tx = self.event_tx.clone();
        TOKIO_RT.spawn(async move {
            let result = controller
                .delete_history()
                .await
                .map_err(|e| e.user_message());
            let _ = tx.send(AppEvent::HistoryDeleted(result)).await;
        });
    }

    /// Export the history in `format` and write it to `path`.
    pub fn handle_export_click(&self, format: ExportFormat, path: PathBuf) {
        let controller = self.controller.clone();
        let tx = self.event_tx.clone();
        TOKIO_RT.spawn(async move {
            let result = match controller.export_history(format).await {
                Ok(bytes) => std::fs::write(&path, bytes)
                    .map(|_| path)
                    .map_err(|e| format!("Échec de l'écriture du fichier : {e}")),
                Err(e) => Err(e.user_message()),
            };
            let _ = tx.send(AppEvent::ExportFinished(result)).await;
        });
    }

    // ========== Event application ==========

    fn apply_event(&self, event: AppEvent) {
        let mut state = self.state.write();
        match event {
            AppEvent::MessageRendered(message) => {
                state.messages.push(message);
            }
            AppEvent::MessageRetracted(message_id) => {
                state.messages.retain(|m| m.id != message_id);
            }
            AppEvent::ConversationReset => {
                state.messages = vec![greeting_message(CLEARED_GREETING)];
            }
            AppEvent::NotificationRaised(kind, text) => {
                state.pending_notifications.push((kind, text));
            }
            AppEvent::BusyChanged(busy) => {
                state.busy = busy;
            }
            AppEvent::ProviderStatusChanged(status) => {
                state.provider_status = status;
            }
            AppEvent::HistoryLoaded(result) => {
                state.history.loading = false;
                match result {
                    Ok(history) => {
                        state.history.entries = Some(history);
                        state.history.error = None;
                    }
                    Err(error) => {
                        state.history.error = Some(error.clone());
                        state
                            .pending_notifications
                            .push((NoticeKind::Error, error));
                    }
                }
            }
            AppEvent::HistoryDeleted(result) => match result {
                Ok(()) => {
                    state.history.entries = None;
                    state
                        .pending_notifications
                        .push((NoticeKind::Info, "Historique effacé".to_string()));
                }
                Err(error) => {
                    state
                        .pending_notifications
                        .push((NoticeKind::Error, error));
                }
            },
            AppEvent::ExportFinished(result) => match result {
                Ok(path) => {
                    state.pending_notifications.push((
                        NoticeKind::Info,
                        format!("Historique exporté vers {}", path.display()),
                    ));
                }
                Err(error) => {
                    state
                        .pending_notifications
                        .push((NoticeKind::Error, error));
                }
            },
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AppError, ProviderStatus, RenderedMessage, Result};
    use shared::dto::chat::{
        ChatHistoryResponse, ChatReply, ChatRequest, LlmStatusResponse,
    };
    use std::time::{Duration, Instant};

    /// Transport stub that always answers "ok".
    #[derive(Default)]
    struct StubTransport;

    #[async_trait::async_trait]
    impl ChatTransport for StubTransport {
        async fn send_chat(&self, _request: &ChatRequest) -> Result<ChatReply> {
            Ok(ChatReply {
                response: "ok".to_string(),
                confidence: Some(0.9),
                provider: Some("groq".to_string()),
                matched_question: None,
                retrieval_only: false,
                is_new_question: false,
            })
        }

        async fn llm_status(&self) -> Result<LlmStatusResponse> {
            Ok(LlmStatusResponse {
                current: "groq".to_string(),
            })
        }

        async fn fetch_history(&self, _user_id: &str) -> Result<ChatHistoryResponse> {
            Ok(ChatHistoryResponse {
                user_id: None,
                total_messages: 0,
                history: Vec::new(),
            })
        }

        async fn export_history(
            &self,
            _user_id: &str,
            _format: ExportFormat,
        ) -> Result<Vec<u8>> {
            Ok(b"[]".to_vec())
        }

        async fn delete_history(&self, _user_id: &str) -> Result<()> {
            Err(AppError::Network("refused".to_string()))
        }
    }

    fn test_app() -> App {
        App::with_transport(Arc::new(StubTransport))
    }

    fn wait_until(app: &App, predicate: impl Fn(&AppState) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            app.on_tick();
            if predicate(&app.state.read()) {
                return;
            }
            assert!(Instant::now() < deadline, "timed out waiting for state");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_initial_state() {
        let app = test_app();
        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Chat);
        assert_eq!(state.messages.len(), 1);
        assert!(!state.busy);
        assert!(app.session_id().starts_with("user_"));
    }

    #[test]
    fn test_send_click_renders_echo_and_reply() {
        let app = test_app();
        app.state.write().input = "Bonjour".to_string();

        app.handle_send_click();

        wait_until(&app, |state| {
            state.messages.iter().any(|m| !m.is_user && m.text == "ok")
        });

        let state = app.state.read();
        assert!(state
            .messages
            .iter()
            .any(|m| m.is_user && m.text == "Bonjour"));
        assert!(state.input.is_empty());
        assert!(!state.busy);
    }

    #[test]
    fn test_send_click_with_empty_input_is_noop() {
        let app = test_app();
        app.state.write().input = "   ".to_string();

        app.handle_send_click();
        app.on_tick();

        let state = app.state.read();
        assert_eq!(state.messages.len(), 1, "only the greeting is present");
    }

    #[test]
    fn test_oversize_draft_stays_in_input_row() {
        let app = test_app();
        let oversize = "x".repeat(2001);
        app.state.write().input = oversize.clone();

        app.handle_send_click();

        wait_until(&app, |state| !state.pending_notifications.is_empty());
        assert_eq!(app.state.read().input, oversize);
    }

    #[test]
    fn test_message_events_update_transcript() {
        let app = test_app();

        app.apply_event(AppEvent::MessageRendered(RenderedMessage::user(
            "m1".to_string(),
            "salut".to_string(),
        )));
        assert_eq!(app.state.read().messages.len(), 2);

        app.apply_event(AppEvent::MessageRetracted("m1".to_string()));
        assert_eq!(app.state.read().messages.len(), 1);

        app.apply_event(AppEvent::ConversationReset);
        let state = app.state.read();
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].text, CLEARED_GREETING);
    }

    #[test]
    fn test_busy_and_status_events() {
        let app = test_app();

        app.apply_event(AppEvent::BusyChanged(true));
        assert!(app.state.read().busy);

        app.apply_event(AppEvent::ProviderStatusChanged(ProviderStatus::Online(
            "groq".to_string(),
        )));
        assert_eq!(
            app.state.read().provider_status,
            ProviderStatus::Online("groq".to_string())
        );
    }

    #[test]
    fn test_history_loaded_event() {
        let app = test_app();

        app.apply_event(AppEvent::HistoryLoaded(Ok(ChatHistoryResponse {
            user_id: None,
            total_messages: 2,
            history: Vec::new(),
        })));

        let state = app.state.read();
        assert!(!state.history.loading);
        assert_eq!(
            state.history.entries.as_ref().map(|h| h.total_messages),
            Some(2)
        );
    }

    #[test]
    fn test_history_fetch_failure_raises_toast() {
        let app = test_app();

        app.apply_event(AppEvent::HistoryLoaded(Err("Erreur".to_string())));

        let state = app.state.read();
        assert_eq!(state.history.error.as_deref(), Some("Erreur"));
        drop(state);
        let notifications = app.take_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].0, NoticeKind::Error);
        // Drained: a second take returns nothing
        assert!(app.take_notifications().is_empty());
    }

    #[test]
    fn test_delete_failure_surfaces_error() {
        // StubTransport rejects deletions
        let app = test_app();

        app.handle_history_delete();

        wait_until(&app, |state| !state.pending_notifications.is_empty());
        let notifications = app.take_notifications();
        assert_eq!(notifications[0].0, NoticeKind::Error);
    }

    #[test]
    fn test_screen_change_triggers_history_refresh() {
        let app = test_app();

        app.handle_screen_change(Screen::History);
        assert_eq!(app.state.read().current_screen, Screen::History);

        wait_until(&app, |state| state.history.entries.is_some());
        assert!(!app.state.read().history.loading);
    }
}
