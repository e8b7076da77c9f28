//! Display helpers for reply metadata badges.

/// Confidence tier of a bot reply, driving the badge color and emoji.
///
/// Tier boundaries follow the product's established thresholds: above 0.7 is
/// trusted, above 0.4 is uncertain, anything below is a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_score(score: f32) -> Self {
        if score > 0.7 {
            ConfidenceTier::High
        } else if score > 0.4 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "✅",
            ConfidenceTier::Medium => "⚠️",
            ConfidenceTier::Low => "❓",
        }
    }
}

/// Badge text for a confidence score, e.g. `✅ 92%`
pub fn confidence_badge(score: f32) -> String {
    format!(
        "{} {:.0}%",
        ConfidenceTier::from_score(score).emoji(),
        score * 100.0
    )
}

/// Human-readable provider name for the header badge
pub fn provider_display_name(provider: &str) -> String {
    match provider {
        "groq" => "⚡ Groq Cloud".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(ConfidenceTier::from_score(0.9), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_score(0.71), ConfidenceTier::High);
        // Boundaries are exclusive
        assert_eq!(ConfidenceTier::from_score(0.7), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_score(0.5), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_score(0.4), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_score(0.0), ConfidenceTier::Low);
    }

    #[test]
    fn test_confidence_badge_rounds_percentage() {
        assert_eq!(confidence_badge(0.9), "✅ 90%");
        assert_eq!(confidence_badge(0.455), "⚠️ 46%");
    }

    #[test]
    fn test_provider_display_name() {
        assert_eq!(provider_display_name("groq"), "⚡ Groq Cloud");
        assert_eq!(provider_display_name("ollama"), "ollama");
    }
}
