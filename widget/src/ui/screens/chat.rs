//! # Chat Screen
//!
//! The conversation with the assistant: transcript with metadata badges,
//! retry affordances for failed sends, and the input row.

use crate::app::App;
use crate::core::{MessageMeta, RenderedMessage};
use crate::ui::theme::Theme;
use crate::utils::format::{confidence_badge, ConfidenceTier};

/// Height reserved below the transcript for the input rows
const INPUT_AREA_HEIGHT: f32 = 84.0;

/// Render the chat screen
pub fn render(ui: &mut egui::Ui, app: &App, theme: &Theme) {
    // Snapshot under a short read lock; rendering happens lock-free
    let (messages, busy) = {
        let state = app.state.read();
        (state.messages.clone(), state.busy)
    };

    let transcript_height = (ui.available_height() - INPUT_AREA_HEIGHT).max(0.0);
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .max_height(transcript_height)
        .show(ui, |ui| {
            for message in &messages {
                render_message(ui, app, theme, message);
                ui.add_space(6.0);
            }
            if busy {
                render_typing_indicator(ui, theme);
            }
        });

    ui.separator();
    render_controls_row(ui, app);
    render_input_row(ui, app, busy);
}

fn render_message(ui: &mut egui::Ui, app: &App, theme: &Theme, message: &RenderedMessage) {
    let layout = if message.is_user {
        egui::Layout::right_to_left(egui::Align::Min)
    } else {
        egui::Layout::left_to_right(egui::Align::Min)
    };

    let fill = if message.failed {
        theme.error_bubble
    } else if message.is_user {
        theme.user_bubble
    } else {
        theme.bot_bubble
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
            ui.set_max_width(ui.available_width() * 0.85);
            ui.vertical(|ui| {
                ui.label(&message.text);

                if let Some(meta) = &message.meta {
                    render_meta_badges(ui, theme, meta);
                }

                if message.failed {
                    ui.horizontal(|ui| {
                        if ui.small_button("↻ Réessayer").clicked() {
                            app.handle_retry_click(message.id.clone());
                        }
                        if ui.small_button("✕ Ignorer").clicked() {
                            app.handle_dismiss_click(&message.id);
                        }
                    });
                }
            });
        });
    });
}

fn render_meta_badges(ui: &mut egui::Ui, theme: &Theme, meta: &MessageMeta) {
    ui.horizontal(|ui| {
        if let Some(confidence) = meta.confidence {
            let tier = ConfidenceTier::from_score(confidence);
            ui.colored_label(theme.confidence_color(tier), confidence_badge(confidence));
        }
        if meta.retrieval_only {
            ui.colored_label(theme.dim, "🔍 FAQ directe");
        } else if let Some(provider) = &meta.provider {
            let emoji = if provider == "groq" { "⚡" } else { "🤖" };
            ui.colored_label(theme.accent, format!("{emoji} {provider}"));
        }
    });
}

fn render_typing_indicator(ui: &mut egui::Ui, theme: &Theme) {
    // Dots cycle every half second while a send is in flight
    let time = ui.ctx().input(|i| i.time);
    let dots = match ((time * 2.0) as usize) % 4 {
        0 => ".",
        1 => "..",
        2 => "...",
        _ => " ",
    };
    ui.colored_label(theme.dim, format!("🤖 L'assistant réfléchit{dots}"));
}

fn render_controls_row(ui: &mut egui::Ui, app: &App) {
    ui.horizontal(|ui| {
        let mut use_augmented_reply = app.state.read().use_augmented_reply;
        if ui
            .checkbox(&mut use_augmented_reply, "Réponse augmentée (LLM)")
            .changed()
        {
            app.state.write().use_augmented_reply = use_augmented_reply;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🗑 Effacer").clicked() {
                app.handle_clear_click();
            }
        });
    });
}

fn render_input_row(ui: &mut egui::Ui, app: &App, busy: bool) {
    ui.horizontal(|ui| {
        let mut should_send = false;

        // try_write: never stall the frame on lock contention
        match app.state.try_write() {
            Some(mut state) => {
                let text_edit = egui::TextEdit::singleline(&mut state.input)
                    .desired_width(ui.available_width() - 90.0)
                    .hint_text("Posez votre question...");
                let response = ui.add_enabled(!busy, text_edit);
                drop(state);

                should_send = response.lost_focus()
                    && ui.ctx().input(|i| i.key_pressed(egui::Key::Enter));
            }
            None => {
                ui.label("…");
            }
        }

        if ui
            .add_enabled(!busy, egui::Button::new("Envoyer"))
            .clicked()
        {
            should_send = true;
        }

        if should_send && !busy {
            app.handle_send_click();
        }
    });
}
