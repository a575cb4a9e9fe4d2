//! User field validation rules

use validator::ValidationError;

/// Reject empty and whitespace-only text
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank_accepts_text() {
        assert!(validate_not_blank("Kamran").is_ok());
        assert!(validate_not_blank(" a ").is_ok());
    }

    #[test]
    fn test_not_blank_rejects_empty_and_whitespace() {
        assert_eq!(validate_not_blank("").unwrap_err().code, "blank");
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
    }
}
