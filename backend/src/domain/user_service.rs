//! User domain services.
//!
//! Implements the user driving ports on top of a [`UserRepository`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserId, Username};

pub(crate) fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    Error::persistence_failure(error.to_string())
}

/// User service implementing [`UsersCommand`] and [`UsersQuery`].
#[derive(Clone)]
pub struct UserService<R> {
    user_repo: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service with the user repository.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, username: Username) -> Result<User, Error> {
        let user = User::new(UserId::random(), username);
        self.user_repo
            .insert(&user)
            .await
            .map_err(map_user_persistence_error)?;
        Ok(user)
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.user_repo
            .list()
            .await
            .map_err(map_user_persistence_error)
    }
}
