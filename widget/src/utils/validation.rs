/// Validation utilities for user input

/// Longest message the backend accepts
pub const MAX_MESSAGE_LEN: usize = 2000;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate a chat message before it reaches the transport layer.
///
/// The caller is expected to pass already-trimmed text; length is counted in
/// characters, not bytes, matching what the user sees in the input field.
pub fn validate_message(text: &str) -> ValidationResult {
    if text.is_empty() {
        return ValidationResult::err("Veuillez saisir un message");
    }

    if text.chars().count() > MAX_MESSAGE_LEN {
        return ValidationResult::err(format!(
            "Message trop long ({MAX_MESSAGE_LEN} caractères maximum)"
        ));
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_validation() {
        assert!(validate_message("Bonjour").is_valid);
        assert!(validate_message(&"x".repeat(2000)).is_valid);
        assert!(!validate_message("").is_valid);
        assert!(!validate_message(&"x".repeat(2001)).is_valid);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 2000 two-byte characters are still within the limit
        assert!(validate_message(&"é".repeat(2000)).is_valid);
        assert!(!validate_message(&"é".repeat(2001)).is_valid);
    }

    #[test]
    fn test_error_messages() {
        let empty = validate_message("");
        assert_eq!(empty.error.as_deref(), Some("Veuillez saisir un message"));

        let oversize = validate_message(&"x".repeat(2001));
        assert!(oversize.error.expect("error").contains("2000"));
    }
}
