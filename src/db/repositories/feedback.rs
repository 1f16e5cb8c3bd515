//! Feedback repository

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, SqlitePool};
use std::sync::Arc;

use crate::db::{Backend, DynDatabasePool};
use crate::models::{CreateFeedbackInput, Feedback};

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn create(&self, input: &CreateFeedbackInput) -> Result<Feedback>;
}

pub struct SqlxFeedbackRepository {
    pool: DynDatabasePool,
}

impl SqlxFeedbackRepository {
    pub fn new(pool: DynDatabasePool) -> Self {
        Self { pool }
    }

    pub fn boxed(pool: DynDatabasePool) -> Arc<dyn FeedbackRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl FeedbackRepository for SqlxFeedbackRepository {
    async fn create(&self, input: &CreateFeedbackInput) -> Result<Feedback> {
        match self.pool.backend()? {
            Backend::Sqlite(pool) => create_sqlite(pool, input).await,
            Backend::Postgres(pool) => create_postgres(pool, input).await,
        }
    }
}

async fn create_sqlite(pool: &SqlitePool, input: &CreateFeedbackInput) -> Result<Feedback> {
    let row = sqlx::query(
        "INSERT INTO feedback (name, email, rating, message) VALUES (?, ?, ?, ?) \
         RETURNING id, name, email, rating, message",
    )
    .bind(&input.name)
    .bind(&input.email)
    .bind(input.rating)
    .bind(&input.message)
    .fetch_one(pool)
    .await
    .context("Failed to create feedback")?;

    Ok(Feedback {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        rating: row.try_get("rating")?,
        message: row.try_get("message")?,
    })
}

async fn create_postgres(pool: &PgPool, input: &CreateFeedbackInput) -> Result<Feedback> {
    let row = sqlx::query(
        "INSERT INTO feedback (name, email, rating, message) VALUES ($1, $2, $3, $4) \
         RETURNING id::BIGINT AS id, name, email, rating::INTEGER AS rating, message",
    )
    .bind(&input.name)
    .bind(&input.email)
    .bind(input.rating)
    .bind(&input.message)
    .fetch_one(pool)
    .await
    .context("Failed to create feedback")?;

    Ok(Feedback {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        rating: row.try_get("rating")?,
        message: row.try_get("message")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_test_pool, schema};

    #[tokio::test]
    async fn test_create_feedback() {
        let pool = create_test_pool().await.unwrap();
        schema::create_tables(&pool).await.unwrap();
        let repo = SqlxFeedbackRepository::new(pool);

        let input = CreateFeedbackInput {
            name: Some("Sam".into()),
            email: Some("sam@example.com".into()),
            rating: Some(4),
            message: Some("Great site".into()),
        };
        let created = repo.create(&input).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.name, input.name);
        assert_eq!(created.email, input.email);
        assert_eq!(created.rating, Some(4));
        assert_eq!(created.message, input.message);
    }

    #[tokio::test]
    async fn test_create_feedback_without_rating() {
        let pool = create_test_pool().await.unwrap();
        schema::create_tables(&pool).await.unwrap();
        let repo = SqlxFeedbackRepository::new(pool);

        let created = repo.create(&CreateFeedbackInput::default()).await.unwrap();
        assert_eq!(created.rating, None);
    }
}

/// Tests against a live PostgreSQL server.
/// Run with: POSTGRES_TEST_URL=postgres://... cargo test -- --ignored
#[cfg(test)]
mod postgres_tests {
    use super::*;
    use crate::db::pool::create_postgres_test_pool;

    #[tokio::test]
    #[ignore = "Requires PostgreSQL server"]
    async fn test_postgres_create_feedback() {
        let pool = create_postgres_test_pool().await.unwrap();
        let repo = SqlxFeedbackRepository::new(pool);

        let input = CreateFeedbackInput {
            name: Some("Sam".into()),
            email: Some("sam@example.com".into()),
            rating: Some(5),
            message: Some("Great site".into()),
        };
        let created = repo.create(&input).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.rating, Some(5));
        assert_eq!(created.message, input.message);

        let unrated = repo.create(&CreateFeedbackInput::default()).await.unwrap();
        assert!(unrated.id > created.id);
        assert_eq!(unrated.rating, None);
    }
}
