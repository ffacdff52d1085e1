//! Registration and login.

use std::sync::Arc;

use quill_shared::dto::{LoginRequest, RegisterRequest};

use crate::domain::{NewUser, Role, User};
use crate::error::{DomainError, RepoError};
use crate::ports::{PasswordService, TokenService, UserRepository};
use crate::validate::{validate_login, validate_register};

/// A freshly authenticated session: the bearer token plus its owner.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    /// Create an account and log it in. New accounts are always authors;
    /// admins are provisioned out of band.
    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthSession, DomainError> {
        let input = validate_register(req)?;

        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(DomainError::Conflict("Email already in use".to_string()));
        }

        let password_hash = self.passwords.hash(&input.password)?;

        let user = self
            .users
            .create(NewUser {
                email: input.email,
                username: input.username,
                password_hash,
                role: Role::Author,
            })
            .await
            .map_err(|err| match err {
                // Lost the race against a concurrent registration.
                RepoError::Constraint(_) => {
                    DomainError::Conflict("Email already in use".to_string())
                }
                other => other.into(),
            })?;

        let token = self.tokens.issue_token(user.id, user.role)?;
        Ok(AuthSession { token, user })
    }

    /// Exchange credentials for a token. The same message covers a wrong
    /// email and a wrong password, so login is not an existence oracle.
    pub async fn login(&self, req: &LoginRequest) -> Result<AuthSession, DomainError> {
        let input = validate_login(req)?;

        let Some(user) = self.users.find_by_email(&input.email).await? else {
            return Err(DomainError::Unauthenticated(
                "Invalid credentials".to_string(),
            ));
        };

        if !self.passwords.verify(&input.password, &user.password_hash)? {
            return Err(DomainError::Unauthenticated(
                "Invalid credentials".to_string(),
            ));
        }

        let token = self.tokens.issue_token(user.id, user.role)?;
        Ok(AuthSession { token, user })
    }
}
