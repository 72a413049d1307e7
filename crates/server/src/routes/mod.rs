pub mod auth;
pub mod health;
pub mod patient;
pub mod professional;
pub mod root;
pub mod service;
pub mod slot;

use crate::error::ApiError;

/// Required text fields must carry something besides whitespace
pub(crate) fn require_text(value: &str, field: &'static str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{field} is required")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::require_text;

    #[test]
    fn blank_values_fail_validation() {
        assert!(require_text("", "name").is_err());
        assert!(require_text("   ", "name").is_err());
        assert!(require_text("Alice", "name").is_ok());
    }
}
