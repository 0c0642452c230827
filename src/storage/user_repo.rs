use crate::domain::user::User;
use crate::error::Result;
use crate::storage::records::UserRecord;
use sqlx::PgConnection;

#[derive(Clone, Debug, Default)]
pub struct UserRepository {}

impl UserRepository {
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Fetches all users ordered by id.
    ///
    /// # Errors
    /// Returns `sqlx::Error` if the query fails.
    #[tracing::instrument(level = "debug", skip(self, conn))]
    pub(crate) async fn list(&self, conn: &mut PgConnection) -> Result<Vec<User>> {
        let records = sqlx::query_as::<_, UserRecord>("SELECT id, username FROM users ORDER BY id")
            .fetch_all(conn)
            .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Finds a user by its id.
    ///
    /// # Errors
    /// Returns `sqlx::Error` if the query fails.
    #[tracing::instrument(level = "debug", skip(self, conn))]
    pub(crate) async fn find_by_id(&self, conn: &mut PgConnection, id: i64) -> Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>("SELECT id, username FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(conn)
            .await?;

        Ok(record.map(Into::into))
    }

    /// Inserts a new user, letting the database assign the id.
    ///
    /// # Errors
    /// Returns `sqlx::Error` if the insert fails, including the unique
    /// violation raised for a duplicate username.
    #[tracing::instrument(level = "debug", skip(self, conn))]
    pub(crate) async fn create(&self, conn: &mut PgConnection, username: &str) -> Result<User> {
        let record = sqlx::query_as::<_, UserRecord>(
            "INSERT INTO users (username) VALUES ($1) RETURNING id, username",
        )
        .bind(username)
        .fetch_one(conn)
        .await?;

        Ok(record.into())
    }

    /// Replaces the username of an existing user. Returns `None` if no row
    /// matched the id.
    ///
    /// # Errors
    /// Returns `sqlx::Error` if the update fails, including the unique
    /// violation raised for a duplicate username.
    #[tracing::instrument(level = "debug", skip(self, conn))]
    pub(crate) async fn update_username(
        &self,
        conn: &mut PgConnection,
        id: i64,
        username: &str,
    ) -> Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            "UPDATE users SET username = $2 WHERE id = $1 RETURNING id, username",
        )
        .bind(id)
        .bind(username)
        .fetch_optional(conn)
        .await?;

        Ok(record.map(Into::into))
    }

    /// Deletes a user. Returns whether a row was removed.
    ///
    /// # Errors
    /// Returns `sqlx::Error` if the deletion fails.
    #[tracing::instrument(level = "debug", skip(self, conn))]
    pub(crate) async fn delete(&self, conn: &mut PgConnection, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1").bind(id).execute(conn).await?;
        Ok(result.rows_affected() > 0)
    }
}
