use crate::domain::user::User;
use sqlx::FromRow;

/// Row shape of the `users` table.
#[derive(Debug, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self { id: record.id, username: record.username }
    }
}
