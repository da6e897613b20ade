use crate::models::{DislikeEdge, LikeEdge};
use sqlx::PgPool;
use thiserror::Error;

/// Errors that can occur when recording or listing swipes
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("unknown user: {0}")]
    UnknownUser(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Owner of the `likes` and `dislikes` relations
///
/// Referential validity of both endpoints is enforced by the store's
/// foreign keys against `users.username`; the ledger itself performs no
/// existence checks. There is no self-swipe guard.
#[derive(Clone)]
pub struct AffinityLedger {
    pool: PgPool,
}

impl AffinityLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a like edge (actor, target)
    ///
    /// Re-issuing the same like is idempotent: the composite primary key
    /// keeps the pair unique and the conflict is swallowed.
    pub async fn like(&self, actor: &str, target: &str) -> Result<(), LedgerError> {
        let result = sqlx::query(
            r#"
            INSERT INTO likes (user_swiping, user_being_liked)
            VALUES ($1, $2)
            ON CONFLICT (user_swiping, user_being_liked) DO NOTHING
            "#,
        )
        .bind(actor)
        .bind(target)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                tracing::debug!("Recorded like: {} -> {}", actor, target);
                Ok(())
            }
            Err(e) => Err(map_edge_error(e, actor, target)),
        }
    }

    /// Record a dislike edge (actor, target)
    pub async fn dislike(&self, actor: &str, target: &str) -> Result<(), LedgerError> {
        let result = sqlx::query(
            r#"
            INSERT INTO dislikes (user_swiping, user_being_disliked)
            VALUES ($1, $2)
            ON CONFLICT (user_swiping, user_being_disliked) DO NOTHING
            "#,
        )
        .bind(actor)
        .bind(target)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                tracing::debug!("Recorded dislike: {} -> {}", actor, target);
                Ok(())
            }
            Err(e) => Err(map_edge_error(e, actor, target)),
        }
    }

    /// All like edges where the given user is the actor
    pub async fn likes_for(&self, username: &str) -> Result<Vec<LikeEdge>, LedgerError> {
        let edges = sqlx::query_as::<_, LikeEdge>(
            "SELECT user_swiping, user_being_liked FROM likes WHERE user_swiping = $1",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!("User {} has {} likes", username, edges.len());

        Ok(edges)
    }

    /// All dislike edges where the given user is the actor
    pub async fn dislikes_for(&self, username: &str) -> Result<Vec<DislikeEdge>, LedgerError> {
        let edges = sqlx::query_as::<_, DislikeEdge>(
            "SELECT user_swiping, user_being_disliked FROM dislikes WHERE user_swiping = $1",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!("User {} has {} dislikes", username, edges.len());

        Ok(edges)
    }
}

/// A foreign-key violation means one of the endpoints does not exist
fn map_edge_error(err: sqlx::Error, actor: &str, target: &str) -> LedgerError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_foreign_key_violation() {
            return LedgerError::UnknownUser(format!("{} or {}", actor, target));
        }
    }
    err.into()
}
