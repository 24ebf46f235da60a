//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, Username};

/// Domain use-case port for creating users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Create and store a user with a fresh identifier.
    async fn create_user(&self, username: Username) -> Result<User, Error>;
}
