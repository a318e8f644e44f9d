use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::modules::users::adapters::outbound::user_repository::{
    RepositoryError, UserRepository,
};
use crate::modules::users::core::user::User;
use crate::modules::users::core::validate::{ValidationError, meets_minimum_age, validate_user};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CreateUserError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("candidate is under the minimum age of {minimum_age}")]
    UnderMinimumAge { minimum_age: u32 },

    #[error("a user already exists for `{0}`")]
    EmailTaken(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

pub struct CreateUserHandler<TStore>
where
    TStore: UserRepository + Send + Sync + 'static,
{
    minimum_age: u32,
    store: Arc<TStore>,
}

impl<TStore> CreateUserHandler<TStore>
where
    TStore: UserRepository + Send + Sync + 'static,
{
    pub fn new(minimum_age: u32, store: Arc<TStore>) -> Self {
        Self { minimum_age, store }
    }

    pub async fn handle(&self, candidate: User) -> Result<User, CreateUserError> {
        let today = Utc::now().date_naive();
        validate_user(&candidate, today)?;
        if !meets_minimum_age(candidate.birth_date, today, self.minimum_age) {
            return Err(CreateUserError::UnderMinimumAge {
                minimum_age: self.minimum_age,
            });
        }
        match self.store.insert(candidate.clone()).await {
            Ok(()) => Ok(candidate),
            Err(RepositoryError::Duplicate(email)) => Err(CreateUserError::EmailTaken(email)),
            Err(other) => Err(CreateUserError::Repository(other)),
        }
    }
}
