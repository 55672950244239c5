//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are chosen based on:
//! - Kitchen ticket readability (a name is printed on one line)
//! - Reasonable UX limits for names and phone numbers

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Customer / contact names
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone numbers, order ids
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Anna", "name", MAX_NAME_LEN).is_ok());

        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "name must not be empty");

        let long = "x".repeat(MAX_SHORT_TEXT_LEN + 1);
        let err = validate_required_text(&long, "number", MAX_SHORT_TEXT_LEN).unwrap_err();
        assert!(err.message.contains("too long"));
    }

    #[test]
    fn test_length_counts_characters() {
        // 100 × 'ü' is 200 bytes but only 100 characters
        let umlauts = "ü".repeat(MAX_SHORT_TEXT_LEN);
        assert!(validate_required_text(&umlauts, "number", MAX_SHORT_TEXT_LEN).is_ok());

        let err = validate_required_text(&format!("{umlauts}ü"), "number", MAX_SHORT_TEXT_LEN)
            .unwrap_err();
        assert_eq!(err.message, "number is too long (101 chars, max 100)");
    }
}
