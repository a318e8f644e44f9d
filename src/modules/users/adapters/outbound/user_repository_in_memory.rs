// In memory implementation of the user store ports.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Store user records in a map keyed by email.
// - Keep every read-modify-write atomic by holding the write guard across
//   the presence check and the mutation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::modules::users::adapters::outbound::user_repository::{
    RepositoryError, UserRepository,
};
use crate::modules::users::core::patch::UserChanges;
use crate::modules::users::core::user::User;
use crate::modules::users::use_cases::search_users_by_birth_date::queries_port::UserQueries;

#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<HashMap<String, User>>,
    is_offline: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("user store offline".into()));
        }
        let mut guard = self.rows.write().await;
        if guard.contains_key(&user.email) {
            return Err(RepositoryError::Duplicate(user.email));
        }
        guard.insert(user.email.clone(), user);
        Ok(())
    }

    async fn update(&self, email: &str, changes: UserChanges) -> Result<User, RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("user store offline".into()));
        }
        let mut guard = self.rows.write().await;
        let user = guard
            .get_mut(email)
            .ok_or_else(|| RepositoryError::NotFound(email.to_string()))?;
        changes.apply_to(user);
        Ok(user.clone())
    }

    async fn replace(&self, email: &str, replacement: User) -> Result<User, RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("user store offline".into()));
        }
        let mut guard = self.rows.write().await;
        if !guard.contains_key(email) {
            return Err(RepositoryError::NotFound(email.to_string()));
        }
        guard.insert(email.to_string(), replacement.clone());
        Ok(replacement)
    }

    async fn remove(&self, email: &str) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("user store offline".into()));
        }
        let mut guard = self.rows.write().await;
        guard
            .remove(email)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(email.to_string()))
    }
}

#[async_trait]
impl UserQueries for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("user store offline"));
        }
        Ok(self.rows.read().await.get(email).cloned())
    }

    async fn find_by_birth_date_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<User>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("user store offline"));
        }
        let guard = self.rows.read().await;
        let mut matches: Vec<User> = guard
            .values()
            .filter(|user| user.birth_date > from && user.birth_date < to)
            .cloned()
            .collect();
        matches.sort_by(|a, b| (a.birth_date, &a.email).cmp(&(b.birth_date, &b.email)));
        Ok(matches)
    }
}
