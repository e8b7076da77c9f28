//! # eframe Shell
//!
//! Thin eframe wrapper around [`App`]: drives `on_tick`, routes queued
//! notifications into toasts, and renders the header plus the active screen.

use crate::app::{App, Screen};
use crate::core::{NoticeKind, ProviderStatus};
use crate::ui::screens;
use crate::ui::theme::Theme;
use crate::ui::widgets::NotificationManager;
use crate::utils::format::provider_display_name;

/// Top-level eframe application
pub struct WidgetShell {
    app: App,
    notifications: NotificationManager,
    theme: Theme,
}

impl WidgetShell {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);

        Self {
            app: App::new(),
            notifications: NotificationManager::new(),
            theme,
        }
    }

    fn render_header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🤖 Assistant Support");
                ui.separator();

                let current_screen = self.app.state.read().current_screen;
                for screen in Screen::all() {
                    if ui
                        .selectable_label(current_screen == *screen, screen.title())
                        .clicked()
                    {
                        self.app.handle_screen_change(*screen);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let status = self.app.state.read().provider_status.clone();
                    let (text, color) = match &status {
                        ProviderStatus::Unknown => {
                            ("⏳ Connexion…".to_string(), self.theme.dim)
                        }
                        ProviderStatus::Online(provider) => {
                            (provider_display_name(provider), self.theme.success)
                        }
                        ProviderStatus::Offline => {
                            ("❌ Non connecté".to_string(), self.theme.error)
                        }
                    };
                    ui.colored_label(color, text);
                });
            });
        });
    }
}

impl eframe::App for WidgetShell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        for (kind, text) in self.app.take_notifications() {
            match kind {
                NoticeKind::Info => self.notifications.info(text),
                NoticeKind::Warning => self.notifications.warning(text),
                NoticeKind::Error => self.notifications.error(text),
            }
        }

        self.render_header(ctx);

        let screen = self.app.state.read().current_screen;
        egui::CentralPanel::default().show(ctx, |ui| match screen {
            Screen::Chat => screens::chat::render(ui, &self.app, &self.theme),
            Screen::History => screens::history::render(ui, &self.app, &self.theme),
        });

        // Keep the typing dots animating while a send is in flight
        if self.app.state.read().busy {
            ctx.request_repaint();
        }

        self.notifications.show(ctx);
    }
}
