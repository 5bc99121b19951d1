//! User input validation

use thiserror::Error;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validation errors for user fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    #[error("email address is not valid")]
    InvalidEmail,

    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,
}

/// Minimal structural email check: one '@' with a dot somewhere after it
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    let email = email.trim();

    let Some((local, domain)) = email.split_once('@') else {
        return Err(UserValidationError::InvalidEmail);
    };

    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("john@example.com").is_ok());
        assert!(validate_email("a.b+c@sub.domain.org").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("john@").is_err());
        assert!(validate_email("john@nodot").is_err());
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("short").is_err());
    }
}
