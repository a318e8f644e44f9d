use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::modules::users::adapters::outbound::user_repository::{
    RepositoryError, UserRepository,
};
use crate::modules::users::core::user::User;
use crate::modules::users::core::validate::{ValidationError, meets_minimum_age, validate_user};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplaceUserError {
    #[error("no user found for `{0}`")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("body email `{body}` does not match path email `{path}`")]
    EmailMismatch { path: String, body: String },

    #[error("replacement is under the minimum age of {minimum_age}")]
    UnderMinimumAge { minimum_age: u32 },

    #[error(transparent)]
    Repository(RepositoryError),
}

pub struct ReplaceUserHandler<TStore>
where
    TStore: UserRepository + Send + Sync + 'static,
{
    minimum_age: u32,
    store: Arc<TStore>,
}

impl<TStore> ReplaceUserHandler<TStore>
where
    TStore: UserRepository + Send + Sync + 'static,
{
    pub fn new(minimum_age: u32, store: Arc<TStore>) -> Self {
        Self { minimum_age, store }
    }

    /// A replacement passes the same schema validation and age floor as a
    /// create, and must keep the email of the record it replaces.
    pub async fn handle(&self, email: &str, replacement: User) -> Result<User, ReplaceUserError> {
        let today = Utc::now().date_naive();
        validate_user(&replacement, today)?;
        if replacement.email != email {
            return Err(ReplaceUserError::EmailMismatch {
                path: email.to_string(),
                body: replacement.email,
            });
        }
        if !meets_minimum_age(replacement.birth_date, today, self.minimum_age) {
            return Err(ReplaceUserError::UnderMinimumAge {
                minimum_age: self.minimum_age,
            });
        }
        match self.store.replace(email, replacement).await {
            Ok(user) => Ok(user),
            Err(RepositoryError::NotFound(email)) => Err(ReplaceUserError::NotFound(email)),
            Err(other) => Err(ReplaceUserError::Repository(other)),
        }
    }
}
