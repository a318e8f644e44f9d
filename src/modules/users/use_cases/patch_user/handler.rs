use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::modules::users::adapters::outbound::user_repository::{
    RepositoryError, UserRepository,
};
use crate::modules::users::core::patch::{PatchError, UserPatch, resolve_patch};
use crate::modules::users::core::user::User;
use crate::modules::users::use_cases::search_users_by_birth_date::queries_port::UserQueries;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatchUserError {
    #[error("no user found for `{0}`")]
    NotFound(String),

    #[error(transparent)]
    Patch(#[from] PatchError),

    #[error(transparent)]
    Repository(RepositoryError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

pub struct PatchUserHandler<TStore>
where
    TStore: UserRepository + Send + Sync + 'static,
{
    store: Arc<TStore>,
    queries: Arc<dyn UserQueries + Send + Sync>,
}

impl<TStore> PatchUserHandler<TStore>
where
    TStore: UserRepository + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, queries: Arc<dyn UserQueries + Send + Sync>) -> Self {
        Self { store, queries }
    }

    pub async fn handle(&self, email: &str, patch: UserPatch) -> Result<User, PatchUserError> {
        let today = Utc::now().date_naive();
        match resolve_patch(patch, today) {
            Ok(changes) => match self.store.update(email, changes).await {
                Ok(user) => Ok(user),
                Err(RepositoryError::NotFound(email)) => Err(PatchUserError::NotFound(email)),
                Err(other) => Err(PatchUserError::Repository(other)),
            },
            // A missing record outranks a bad payload.
            Err(patch_error) => {
                let existing = self
                    .queries
                    .find_by_email(email)
                    .await
                    .map_err(|e| PatchUserError::Unexpected(e.to_string()))?;
                if existing.is_none() {
                    Err(PatchUserError::NotFound(email.to_string()))
                } else {
                    Err(PatchUserError::Patch(patch_error))
                }
            }
        }
    }
}
