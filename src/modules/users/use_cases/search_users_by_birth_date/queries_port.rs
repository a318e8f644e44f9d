use async_trait::async_trait;
use chrono::NaiveDate;

use crate::modules::users::core::user::User;

#[async_trait]
pub trait UserQueries {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;

    /// Records with a birth date strictly between `from` and `to`, both
    /// bounds exclusive, sorted by birth date then email.
    async fn find_by_birth_date_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<User>>;
}
