use crate::core::password::{self, HashError};
use crate::models::{NewUser, ProfileChanges, User};
use sqlx::PgPool;
use thiserror::Error;

/// Errors that can occur when operating on user records
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("username or email already exists")]
    Duplicate,

    #[error(transparent)]
    Hash(#[from] HashError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Owner of the `users` relation
///
/// Holds the pool handle injected at startup; nothing else in the process
/// reads or writes user rows.
#[derive(Clone)]
pub struct UserDirectory {
    pool: PgPool,
}

impl UserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user with a hashed password
    ///
    /// Uniqueness of username and email is not pre-checked; a racing
    /// insert is reported only when the store rejects the write, which
    /// maps to [`DirectoryError::Duplicate`].
    pub async fn signup(&self, new_user: NewUser) -> Result<User, DirectoryError> {
        let digest = password::hash_blocking(new_user.password).await?;

        let inserted = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password, firstname, lastname)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&digest)
        .bind(&new_user.firstname)
        .bind(&new_user.lastname)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(user) => {
                tracing::info!("Created user {}", user.username);
                Ok(user)
            }
            Err(e) if is_unique_violation(&e) => Err(DirectoryError::Duplicate),
            Err(e) => Err(e.into()),
        }
    }

    /// Look up a user by username and verify the supplied password
    ///
    /// Returns `None` both for an unknown username and for a wrong
    /// password; callers cannot distinguish the two cases.
    pub async fn authenticate(
        &self,
        username: &str,
        plaintext: &str,
    ) -> Result<Option<User>, DirectoryError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        match user {
            Some(user) => {
                let verified =
                    password::verify_blocking(user.password.clone(), plaintext.to_string()).await;
                if verified {
                    Ok(Some(user))
                } else {
                    tracing::debug!("Password verification failed for {}", username);
                    Ok(None)
                }
            }
            None => Ok(None),
        }
    }

    /// Replace the mutable profile fields of an existing user
    ///
    /// `id`, `username` and `password` are never touched. Returns `None`
    /// when no row matches the username. The caller is responsible for
    /// authenticating before invoking this.
    pub async fn update(
        &self,
        username: &str,
        changes: ProfileChanges,
    ) -> Result<Option<User>, DirectoryError> {
        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET firstname = $2,
                lastname = $3,
                email = $4,
                location = $5,
                hobbies = $6,
                interests = $7,
                friendradius = $8,
                image_url = $9
            WHERE username = $1
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(&changes.firstname)
        .bind(&changes.lastname)
        .bind(&changes.email)
        .bind(&changes.location)
        .bind(&changes.hobbies)
        .bind(&changes.interests)
        .bind(changes.friendradius)
        .bind(&changes.image_url)
        .fetch_optional(&self.pool)
        .await;

        match updated {
            Ok(user) => {
                if user.is_some() {
                    tracing::info!("Updated profile for {}", username);
                }
                Ok(user)
            }
            // The new email can collide with another account
            Err(e) if is_unique_violation(&e) => Err(DirectoryError::Duplicate),
            Err(e) => Err(e.into()),
        }
    }

    /// Every user record, in natural storage order
    pub async fn list_all(&self) -> Result<Vec<User>, DirectoryError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users")
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("Listed {} users", users.len());

        Ok(users)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, DirectoryError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_error_message() {
        let err = DirectoryError::Duplicate;
        assert_eq!(err.to_string(), "username or email already exists");
    }

    #[test]
    fn test_row_not_found_is_not_unique_violation() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }
}
