use quill_shared::dto::{LoginRequest, RegisterRequest};

use super::{is_email, join_errors, trimmed_or_none};
use crate::error::DomainError;

pub const MIN_PASSWORD_CHARS: usize = 6;

/// Normalized registration payload.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub email: String,
    pub username: Option<String>,
    pub password: String,
}

/// Normalized login payload. Presence only; the email format was already
/// enforced at registration time.
#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub fn validate_register(req: &RegisterRequest) -> Result<RegisterInput, DomainError> {
    let mut errors = Vec::new();

    let email = req.email.as_deref().map(str::trim).unwrap_or("");
    if email.is_empty() {
        errors.push("Email is required".to_string());
    } else if !is_email(email) {
        errors.push("Invalid email format".to_string());
    }

    let password = req.password.as_deref().unwrap_or("");
    if password.chars().count() < MIN_PASSWORD_CHARS {
        errors.push(format!(
            "Password must be at least {MIN_PASSWORD_CHARS} characters"
        ));
    }

    if !errors.is_empty() {
        return Err(join_errors(errors));
    }

    Ok(RegisterInput {
        email: email.to_lowercase(),
        username: trimmed_or_none(req.username.as_deref()),
        password: password.to_string(),
    })
}

pub fn validate_login(req: &LoginRequest) -> Result<LoginInput, DomainError> {
    let mut errors = Vec::new();

    let email = req.email.as_deref().map(str::trim).unwrap_or("");
    if email.is_empty() {
        errors.push("Email is required".to_string());
    }

    let password = req.password.as_deref().unwrap_or("");
    if password.is_empty() {
        errors.push("Password is required".to_string());
    }

    if !errors.is_empty() {
        return Err(join_errors(errors));
    }

    Ok(LoginInput {
        email: email.to_lowercase(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(email: Option<&str>, username: Option<&str>, password: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            email: email.map(String::from),
            username: username.map(String::from),
            password: password.map(String::from),
        }
    }

    #[test]
    fn register_normalizes_email_and_username() {
        let input =
            validate_register(&register(Some("  A@B.COM "), Some("  ada  "), Some("secret1")))
                .unwrap();
        assert_eq!(input.email, "a@b.com");
        assert_eq!(input.username.as_deref(), Some("ada"));
    }

    #[test]
    fn register_blank_username_becomes_none() {
        let input =
            validate_register(&register(Some("a@b.com"), Some("   "), Some("secret1"))).unwrap();
        assert_eq!(input.username, None);

        let input = validate_register(&register(Some("a@b.com"), None, Some("secret1"))).unwrap();
        assert_eq!(input.username, None);
    }

    #[test]
    fn register_collects_every_violation() {
        let err = validate_register(&register(None, None, Some("123"))).unwrap_err();
        let DomainError::Validation(msg) = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            msg,
            "Email is required, Password must be at least 6 characters"
        );
    }

    #[test]
    fn register_rejects_short_password() {
        let err = validate_register(&register(Some("a@b.com"), None, Some("12345"))).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn register_rejects_malformed_email() {
        let err = validate_register(&register(Some("nope"), None, Some("secret1"))).unwrap_err();
        let DomainError::Validation(msg) = err else {
            panic!("expected validation error");
        };
        assert_eq!(msg, "Invalid email format");
    }

    #[test]
    fn login_checks_presence_only() {
        let input = validate_login(&LoginRequest {
            email: Some(" Someone@Example.Com ".to_string()),
            password: Some("whatever".to_string()),
        })
        .unwrap();
        assert_eq!(input.email, "someone@example.com");

        let err = validate_login(&LoginRequest::default()).unwrap_err();
        let DomainError::Validation(msg) = err else {
            panic!("expected validation error");
        };
        assert_eq!(msg, "Email is required, Password is required");
    }
}
