//! Contact message repository

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, SqlitePool};
use std::sync::Arc;

use crate::db::{Backend, DynDatabasePool};
use crate::models::{ContactMessage, CreateContactInput};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, input: &CreateContactInput) -> Result<ContactMessage>;
}

pub struct SqlxContactRepository {
    pool: DynDatabasePool,
}

impl SqlxContactRepository {
    pub fn new(pool: DynDatabasePool) -> Self {
        Self { pool }
    }

    pub fn boxed(pool: DynDatabasePool) -> Arc<dyn ContactRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepository {
    async fn create(&self, input: &CreateContactInput) -> Result<ContactMessage> {
        match self.pool.backend()? {
            Backend::Sqlite(pool) => create_sqlite(pool, input).await,
            Backend::Postgres(pool) => create_postgres(pool, input).await,
        }
    }
}

async fn create_sqlite(pool: &SqlitePool, input: &CreateContactInput) -> Result<ContactMessage> {
    let row = sqlx::query(
        "INSERT INTO contact_messages (first_name, last_name, email, phone, subject, message) \
         VALUES (?, ?, ?, ?, ?, ?) \
         RETURNING id, first_name, last_name, email, phone, subject, message",
    )
    .bind(&input.first_name)
    .bind(&input.last_name)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(&input.subject)
    .bind(&input.message)
    .fetch_one(pool)
    .await
    .context("Failed to create contact message")?;

    Ok(ContactMessage {
        id: row.try_get("id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        subject: row.try_get("subject")?,
        message: row.try_get("message")?,
    })
}

async fn create_postgres(pool: &PgPool, input: &CreateContactInput) -> Result<ContactMessage> {
    let row = sqlx::query(
        "INSERT INTO contact_messages (first_name, last_name, email, phone, subject, message) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING id::BIGINT AS id, first_name, last_name, email, phone, subject, message",
    )
    .bind(&input.first_name)
    .bind(&input.last_name)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(&input.subject)
    .bind(&input.message)
    .fetch_one(pool)
    .await
    .context("Failed to create contact message")?;

    Ok(ContactMessage {
        id: row.try_get("id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        subject: row.try_get("subject")?,
        message: row.try_get("message")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_test_pool, schema};

    #[tokio::test]
    async fn test_create_returns_submitted_fields_and_new_id() {
        let pool = create_test_pool().await.unwrap();
        schema::create_tables(&pool).await.unwrap();
        let repo = SqlxContactRepository::new(pool);

        let input = CreateContactInput {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            email: Some("ada@example.com".into()),
            phone: Some("+44 20 0000".into()),
            subject: Some("Hello".into()),
            message: Some("Engines".into()),
        };

        let first = repo.create(&input).await.unwrap();
        let second = repo.create(&input).await.unwrap();

        assert!(first.id > 0);
        assert_ne!(first.id, second.id);
        assert_eq!(first.first_name, input.first_name);
        assert_eq!(first.last_name, input.last_name);
        assert_eq!(first.email, input.email);
        assert_eq!(first.phone, input.phone);
        assert_eq!(first.subject, input.subject);
        assert_eq!(first.message, input.message);
    }

    #[tokio::test]
    async fn test_create_stores_missing_fields_as_null() {
        let pool = create_test_pool().await.unwrap();
        schema::create_tables(&pool).await.unwrap();
        let repo = SqlxContactRepository::new(pool);

        let created = repo
            .create(&CreateContactInput {
                email: Some("only@example.com".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.email.as_deref(), Some("only@example.com"));
        assert_eq!(created.first_name, None);
        assert_eq!(created.message, None);
    }

    #[tokio::test]
    async fn test_create_without_table_is_an_error() {
        let pool = create_test_pool().await.unwrap();
        let repo = SqlxContactRepository::new(pool);

        let err = repo.create(&CreateContactInput::default()).await.unwrap_err();
        assert!(err.root_cause().to_string().contains("no such table"));
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
    async fn test_postgres_create_contact() {
        let pool = create_postgres_test_pool().await.unwrap();
        let repo = SqlxContactRepository::new(pool);

        let input = CreateContactInput {
            first_name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            message: Some("Engines".into()),
            ..Default::default()
        };
        let created = repo.create(&input).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.first_name, input.first_name);
        assert_eq!(created.last_name, None);
        assert_eq!(created.email, input.email);
        assert_eq!(created.phone, None);
        assert_eq!(created.subject, None);
        assert_eq!(created.message, input.message);
    }
}
