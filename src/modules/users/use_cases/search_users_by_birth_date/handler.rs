use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;

use crate::modules::users::core::user::User;
use crate::modules::users::use_cases::search_users_by_birth_date::queries_port::UserQueries;

#[derive(Debug, Error)]
pub enum SearchUsersError {
    #[error("invalid range: `{from}` is after `{to}`")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    #[error("unexpected: {0}")]
    Unexpected(String),
}

pub struct SearchUsersByBirthDateHandler {
    queries: Arc<dyn UserQueries + Send + Sync>,
}

impl SearchUsersByBirthDateHandler {
    pub fn new(queries: Arc<dyn UserQueries + Send + Sync>) -> Self {
        Self { queries }
    }

    /// Both bounds are exclusive: a user born exactly on `from` or `to` is
    /// not part of the result.
    pub async fn handle(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<User>, SearchUsersError> {
        if from > to {
            return Err(SearchUsersError::InvalidRange { from, to });
        }
        self.queries
            .find_by_birth_date_between(from, to)
            .await
            .map_err(|e| SearchUsersError::Unexpected(e.to_string()))
    }
}
