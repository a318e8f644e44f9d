use async_trait::async_trait;
use thiserror::Error;

use crate::modules::users::core::patch::UserChanges;
use crate::modules::users::core::user::User;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RepositoryError {
    #[error("no user stored for `{0}`")]
    NotFound(String),

    #[error("a user already exists for `{0}`")]
    Duplicate(String),

    #[error("user store unavailable: {0}")]
    Backend(String),
}

/// Write side of the user store. Every method is a single atomic step:
/// implementations hold their lock across the presence check and the write,
/// so callers never need a separate exists-check.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new record, failing with `Duplicate` if the email is taken.
    async fn insert(&self, user: User) -> Result<(), RepositoryError>;

    /// Merge `changes` into the record at `email` and return the result.
    async fn update(&self, email: &str, changes: UserChanges) -> Result<User, RepositoryError>;

    /// Swap the record at `email` for `replacement`.
    async fn replace(&self, email: &str, replacement: User) -> Result<User, RepositoryError>;

    /// Drop the record at `email`.
    async fn remove(&self, email: &str) -> Result<(), RepositoryError>;
}
