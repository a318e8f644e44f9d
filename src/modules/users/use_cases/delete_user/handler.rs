use std::sync::Arc;

use thiserror::Error;

use crate::modules::users::adapters::outbound::user_repository::{
    RepositoryError, UserRepository,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeleteUserError {
    #[error("no user found for `{0}`")]
    NotFound(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

pub struct DeleteUserHandler<TStore>
where
    TStore: UserRepository + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteUserHandler<TStore>
where
    TStore: UserRepository + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, email: &str) -> Result<(), DeleteUserError> {
        match self.store.remove(email).await {
            Ok(()) => Ok(()),
            Err(RepositoryError::NotFound(email)) => Err(DeleteUserError::NotFound(email)),
            Err(other) => Err(DeleteUserError::Repository(other)),
        }
    }
}
