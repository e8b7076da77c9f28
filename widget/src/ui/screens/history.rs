//! # History Screen
//!
//! Server-side history for the current session: listing, export to a file
//! chosen through the native save dialog, and deletion.

use crate::app::App;
use crate::ui::theme::Theme;
use crate::utils::format::{confidence_badge, ConfidenceTier};
use shared::dto::chat::{ExportFormat, HistoryEntry};

/// Render the history screen
pub fn render(ui: &mut egui::Ui, app: &App, theme: &Theme) {
    let history = app.state.read().history.clone();
    let session_id = app.session_id().to_string();

    ui.horizontal(|ui| {
        ui.heading("Historique de session");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(theme.dim, format!("Session : {session_id}"));
        });
    });
    ui.separator();

    ui.horizontal(|ui| {
        if ui.button("🔄 Actualiser").clicked() {
            app.handle_history_refresh();
        }
        if ui.button("💾 Exporter JSON").clicked() {
            export_with_dialog(app, ExportFormat::Json);
        }
        if ui.button("💾 Exporter TXT").clicked() {
            export_with_dialog(app, ExportFormat::Txt);
        }
        if ui.button("🗑 Supprimer l'historique").clicked() {
            app.handle_history_delete();
        }
    });
    ui.add_space(6.0);

    if history.loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.colored_label(theme.dim, "Chargement de l'historique…");
        });
        return;
    }

    if let Some(error) = &history.error {
        ui.colored_label(theme.error, format!("❌ {error}"));
        return;
    }

    match &history.entries {
        Some(listing) if listing.history.is_empty() => {
            ui.colored_label(theme.dim, "Aucun échange enregistré pour cette session.");
        }
        Some(listing) => {
            ui.colored_label(
                theme.dim,
                format!("{} messages enregistrés", listing.total_messages),
            );
            ui.add_space(4.0);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for entry in &listing.history {
                        render_entry(ui, theme, entry);
                        ui.add_space(6.0);
                    }
                });
        }
        None => {
            ui.colored_label(theme.dim, "Aucun historique chargé.");
        }
    }
}

fn render_entry(ui: &mut egui::Ui, theme: &Theme, entry: &HistoryEntry) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(format!("Vous : {}", entry.user_message));
        ui.colored_label(theme.text, format!("Bot : {}", entry.bot_response));
        ui.horizontal(|ui| {
            if let Some(confidence) = entry.confidence {
                let tier = ConfidenceTier::from_score(confidence);
                ui.colored_label(theme.confidence_color(tier), confidence_badge(confidence));
            }
            if entry.retrieval_only {
                ui.colored_label(theme.dim, "🔍 FAQ directe");
            } else if let Some(provider) = &entry.provider {
                ui.colored_label(theme.accent, format!("🤖 {provider}"));
            }
        });
    });
}

/// Ask for a target path, then export in the given format.
fn export_with_dialog(app: &App, format: ExportFormat) {
    let suggested = format!("historique.{}", format.extension());
    if let Some(path) = rfd::FileDialog::new()
        .set_file_name(suggested)
        .add_filter(format.as_str(), &[format.extension()])
        .save_file()
    {
        app.handle_export_click(format, path);
    }
}
