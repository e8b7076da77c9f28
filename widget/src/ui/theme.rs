//! # GUI Theme
//!
//! Dark theme for the support widget, with the status colors driving the
//! confidence and provider badges.

use crate::utils::format::ConfidenceTier;
use egui::Theme as EguiTheme;
use egui::{Color32, Context, Visuals};

/// Color palette used by all screens
#[derive(Debug, Clone)]
pub struct Theme {
    /// Window background
    pub background: Color32,
    /// Panel/bubble background
    pub panel: Color32,
    /// Primary text
    pub text: Color32,
    /// Accent for interactive highlights and provider badges
    pub accent: Color32,
    /// High confidence, provider online
    pub success: Color32,
    /// Medium confidence, degraded states
    pub warning: Color32,
    /// Low confidence, failures
    pub error: Color32,
    /// Secondary text, inactive elements
    pub dim: Color32,
    /// User message bubble
    pub user_bubble: Color32,
    /// Bot message bubble
    pub bot_bubble: Color32,
    /// Failed message bubble
    pub error_bubble: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color32::from_rgb(18, 18, 22),
            panel: Color32::from_rgb(28, 28, 34),
            text: Color32::from_rgb(235, 235, 238),
            accent: Color32::from_rgb(100, 150, 255),
            success: Color32::from_rgb(76, 175, 80),
            warning: Color32::from_rgb(255, 152, 0),
            error: Color32::from_rgb(244, 67, 54),
            dim: Color32::from_rgb(140, 140, 150),
            user_bubble: Color32::from_rgb(38, 60, 110),
            bot_bubble: Color32::from_rgb(34, 34, 42),
            error_bubble: Color32::from_rgb(64, 28, 30),
        }
    }
}

impl Theme {
    /// Install the palette into the egui context.
    ///
    /// Uses `style_mut_of` instead of `set_visuals`, which panics in
    /// egui 0.33 when fonts are not yet initialized.
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();
        ctx.style_mut_of(EguiTheme::Dark, |style| {
            style.visuals = visuals.clone();
        });
        ctx.style_mut_of(EguiTheme::Light, |style| {
            style.visuals = visuals;
        });
    }

    fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();
        visuals.override_text_color = Some(self.text);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.panel;
        visuals.faint_bg_color = self.panel;
        visuals.hyperlink_color = self.accent;
        visuals
    }

    /// Badge color for a confidence tier
    pub fn confidence_color(&self, tier: ConfidenceTier) -> Color32 {
        match tier {
            ConfidenceTier::High => self.success,
            ConfidenceTier::Medium => self.warning,
            ConfidenceTier::Low => self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_colors_follow_tiers() {
        let theme = Theme::default();
        assert_eq!(theme.confidence_color(ConfidenceTier::High), theme.success);
        assert_eq!(
            theme.confidence_color(ConfidenceTier::Medium),
            theme.warning
        );
        assert_eq!(theme.confidence_color(ConfidenceTier::Low), theme.error);
    }
}
