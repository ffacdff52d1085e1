//! Credential ports - password hashing and bearer-token issuance.

use crate::domain::Role;
use crate::error::DomainError;

/// Claims carried by an issued token.
#[derive(Debug, Clone, Copy)]
pub struct TokenClaims {
    pub user_id: i64,
    pub role: Role,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Issues and verifies bearer tokens.
pub trait TokenService: Send + Sync {
    fn issue_token(&self, user_id: i64, role: Role) -> Result<String, AuthError>;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Lifetime of newly issued tokens, in seconds.
    fn expiration_seconds(&self) -> i64;
}

/// Hashes and verifies passwords.
pub trait PasswordService: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Credential failures.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("hashing error: {0}")]
    Hashing(String),
}

/// In service context a hashing or token-issuance failure is a server
/// fault; everything else means the caller is not authenticated.
impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Hashing(msg) => DomainError::Internal(msg),
            AuthError::InvalidToken(msg) => DomainError::Internal(msg),
            AuthError::InvalidCredentials => {
                DomainError::Unauthenticated("Invalid credentials".to_string())
            }
            other => DomainError::Unauthenticated(other.to_string()),
        }
    }
}
