//! User queries - profile lookup and the admin directory.

use std::sync::Arc;

use crate::domain::{Actor, Role, User};
use crate::error::DomainError;
use crate::ports::UserRepository;

pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Admin-only directory of every account.
    pub async fn list(&self, actor: &Actor) -> Result<Vec<User>, DomainError> {
        if actor.role != Role::Admin {
            return Err(DomainError::Forbidden);
        }
        Ok(self.users.find_all().await?)
    }

    pub async fn get(&self, id: i64) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("User"))
    }
}
