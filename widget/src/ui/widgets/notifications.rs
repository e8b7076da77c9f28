//! # Notifications Widget
//!
//! Toast notification system using egui-notify for send failures, export
//! confirmations, and new-question notices.

use egui_notify::Toasts;

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    /// Create a new notification manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a success notification
    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    /// Show an error notification (failed sends, export failures)
    pub fn error(&mut self, message: String) {
        self.toasts.error(message);
    }

    /// Show a warning notification (input validation)
    pub fn warning(&mut self, message: String) {
        self.toasts.warning(message);
    }

    /// Show an info notification (new questions, export done)
    pub fn info(&mut self, message: String) {
        self.toasts.info(message);
    }

    /// Render pending toasts into the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
