use crate::domain::user::User;
use crate::error::{AppError, Result};
use crate::storage::DbPool;
use crate::storage::user_repo::UserRepository;

#[derive(Clone, Debug)]
pub struct UserService {
    pool: DbPool,
    user_repo: UserRepository,
}

impl UserService {
    #[must_use]
    pub const fn new(pool: DbPool, user_repo: UserRepository) -> Self {
        Self { pool, user_repo }
    }

    #[tracing::instrument(skip(self), err(level = "warn"))]
    pub async fn list(&self) -> Result<Vec<User>> {
        let mut conn = self.pool.acquire().await?;
        self.user_repo.list(&mut conn).await
    }

    #[tracing::instrument(skip(self), err(level = "debug"))]
    pub async fn get(&self, id: i64) -> Result<User> {
        let mut conn = self.pool.acquire().await?;
        self.user_repo.find_by_id(&mut conn, id).await?.ok_or(AppError::NotFound)
    }

    #[tracing::instrument(skip(self, username), fields(user_id = tracing::field::Empty), err(level = "warn"))]
    pub async fn create(&self, username: &str) -> Result<User> {
        let mut conn = self.pool.acquire().await?;
        let user = self.user_repo.create(&mut conn, username).await.map_err(map_duplicate_username)?;

        tracing::Span::current().record("user_id", user.id);
        tracing::info!("User created");

        Ok(user)
    }

    #[tracing::instrument(skip(self, username), err(level = "warn"))]
    pub async fn update(&self, id: i64, username: &str) -> Result<User> {
        let mut conn = self.pool.acquire().await?;
        let user = self
            .user_repo
            .update_username(&mut conn, id, username)
            .await
            .map_err(map_duplicate_username)?
            .ok_or(AppError::NotFound)?;

        tracing::info!("User updated");

        Ok(user)
    }

    #[tracing::instrument(skip(self), err(level = "warn"))]
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        if !self.user_repo.delete(&mut conn, id).await? {
            return Err(AppError::NotFound);
        }

        tracing::info!("User deleted");

        Ok(())
    }
}

// The users table enforces username uniqueness; surface the constraint
// violation as a field error instead of a generic database failure.
fn map_duplicate_username(err: AppError) -> AppError {
    match &err {
        AppError::Database(sqlx::Error::Database(db)) if db.is_unique_violation() => AppError::Validation {
            field: "username",
            message: "A user with that username already exists.".to_string(),
        },
        _ => err,
    }
}
