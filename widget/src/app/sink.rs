//! # Channel Rendering Sink
//!
//! [`RenderSink`] implementation backed by the app event channel. Controller
//! operations run on the Tokio runtime; each sink call becomes an
//! [`AppEvent`] that the frame loop applies in `on_tick`, so the controller
//! never touches egui state directly.

use crate::app::events::AppEvent;
use crate::core::{NoticeKind, ProviderStatus, RenderSink, RenderedMessage};
use async_channel::Sender;

/// Forwards sink calls as events to the main thread.
pub struct ChannelSink {
    event_tx: Sender<AppEvent>,
}

impl ChannelSink {
    pub fn new(event_tx: Sender<AppEvent>) -> Self {
        Self { event_tx }
    }

    fn emit(&self, event: AppEvent) {
        // Unbounded channel: try_send only fails once the receiver is gone,
        // at which point the UI no longer exists and the event is moot
        if self.event_tx.try_send(event).is_err() {
            tracing::debug!("event channel closed, dropping sink event");
        }
    }
}

impl RenderSink for ChannelSink {
    fn render_message(&self, message: RenderedMessage) {
        self.emit(AppEvent::MessageRendered(message));
    }

    fn retract_message(&self, message_id: &str) {
        self.emit(AppEvent::MessageRetracted(message_id.to_string()));
    }

    fn reset_conversation(&self) {
        self.emit(AppEvent::ConversationReset);
    }

    fn render_notification(&self, text: &str, kind: NoticeKind) {
        self.emit(AppEvent::NotificationRaised(kind, text.to_string()));
    }

    fn set_busy(&self, busy: bool) {
        self.emit(AppEvent::BusyChanged(busy));
    }

    fn set_status_indicator(&self, status: ProviderStatus) {
        self.emit(AppEvent::ProviderStatusChanged(status));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_calls_map_to_events() {
        let (tx, rx) = async_channel::unbounded();
        let sink = ChannelSink::new(tx);

        sink.render_message(RenderedMessage::user("m1".to_string(), "salut".to_string()));
        sink.retract_message("m1");
        sink.reset_conversation();
        sink.render_notification("oops", NoticeKind::Error);
        sink.set_busy(true);
        sink.set_status_indicator(ProviderStatus::Offline);

        assert!(matches!(
            rx.try_recv().expect("event"),
            AppEvent::MessageRendered(m) if m.id == "m1" && m.is_user
        ));
        assert!(matches!(
            rx.try_recv().expect("event"),
            AppEvent::MessageRetracted(id) if id == "m1"
        ));
        assert!(matches!(rx.try_recv().expect("event"), AppEvent::ConversationReset));
        assert!(matches!(
            rx.try_recv().expect("event"),
            AppEvent::NotificationRaised(NoticeKind::Error, text) if text == "oops"
        ));
        assert!(matches!(rx.try_recv().expect("event"), AppEvent::BusyChanged(true)));
        assert!(matches!(
            rx.try_recv().expect("event"),
            AppEvent::ProviderStatusChanged(ProviderStatus::Offline)
        ));
    }

    #[test]
    fn closed_channel_is_tolerated() {
        let (tx, rx) = async_channel::unbounded();
        drop(rx);
        let sink = ChannelSink::new(tx);
        // Must not panic
        sink.set_busy(false);
    }
}
