//! News repository
//!
//! Every method issues exactly one statement. Missing rows are reported as
//! `None`/`false` from the statement's own result (`RETURNING` or the
//! affected row count), never from a separate existence check.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, SqlitePool};
use std::sync::Arc;

use crate::db::{Backend, DynDatabasePool};
use crate::models::{News, NewsInput};

#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// All articles, newest date first, ties broken by newest id
    async fn list(&self) -> Result<Vec<News>>;
    async fn get_by_id(&self, id: i64) -> Result<Option<News>>;
    async fn create(&self, input: &NewsInput) -> Result<News>;
    /// Overwrite every field of the article; `None` if the id is unknown
    async fn replace(&self, id: i64, input: &NewsInput) -> Result<Option<News>>;
    /// `false` if no row was removed
    async fn delete(&self, id: i64) -> Result<bool>;
}

pub struct SqlxNewsRepository {
    pool: DynDatabasePool,
}

impl SqlxNewsRepository {
    pub fn new(pool: DynDatabasePool) -> Self {
        Self { pool }
    }

    pub fn boxed(pool: DynDatabasePool) -> Arc<dyn NewsRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl NewsRepository for SqlxNewsRepository {
    async fn list(&self) -> Result<Vec<News>> {
        match self.pool.backend()? {
            Backend::Sqlite(pool) => list_sqlite(pool).await,
            Backend::Postgres(pool) => list_postgres(pool).await,
        }
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<News>> {
        match self.pool.backend()? {
            Backend::Sqlite(pool) => get_by_id_sqlite(pool, id).await,
            Backend::Postgres(pool) => get_by_id_postgres(pool, id).await,
        }
    }

    async fn create(&self, input: &NewsInput) -> Result<News> {
        match self.pool.backend()? {
            Backend::Sqlite(pool) => create_sqlite(pool, input).await,
            Backend::Postgres(pool) => create_postgres(pool, input).await,
        }
    }

    async fn replace(&self, id: i64, input: &NewsInput) -> Result<Option<News>> {
        match self.pool.backend()? {
            Backend::Sqlite(pool) => replace_sqlite(pool, id, input).await,
            Backend::Postgres(pool) => replace_postgres(pool, id, input).await,
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        match self.pool.backend()? {
            Backend::Sqlite(pool) => delete_sqlite(pool, id).await,
            Backend::Postgres(pool) => delete_postgres(pool, id).await,
        }
    }
}

// SQLite implementations
async fn list_sqlite(pool: &SqlitePool) -> Result<Vec<News>> {
    let rows = sqlx::query(
        "SELECT id, title, category, image_url, content, date FROM news ORDER BY date DESC, id DESC",
    )
    .fetch_all(pool)
    .await
    .context("Failed to list news")?;
    rows.iter().map(row_to_news_sqlite).collect()
}

async fn get_by_id_sqlite(pool: &SqlitePool, id: i64) -> Result<Option<News>> {
    let row = sqlx::query(
        "SELECT id, title, category, image_url, content, date FROM news WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("Failed to get news")?;
    row.map(|r| row_to_news_sqlite(&r)).transpose()
}

async fn create_sqlite(pool: &SqlitePool, input: &NewsInput) -> Result<News> {
    let row = sqlx::query(
        "INSERT INTO news (title, category, image_url, content, date) VALUES (?, ?, ?, ?, ?) \
         RETURNING id, title, category, image_url, content, date",
    )
    .bind(&input.title)
    .bind(&input.category)
    .bind(&input.image_url)
    .bind(&input.content)
    .bind(input.date)
    .fetch_one(pool)
    .await
    .context("Failed to create news")?;
    row_to_news_sqlite(&row)
}

async fn replace_sqlite(pool: &SqlitePool, id: i64, input: &NewsInput) -> Result<Option<News>> {
    let row = sqlx::query(
        "UPDATE news SET title = ?, category = ?, image_url = ?, content = ?, date = ? WHERE id = ? \
         RETURNING id, title, category, image_url, content, date",
    )
    .bind(&input.title)
    .bind(&input.category)
    .bind(&input.image_url)
    .bind(&input.content)
    .bind(input.date)
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("Failed to update news")?;
    row.map(|r| row_to_news_sqlite(&r)).transpose()
}

async fn delete_sqlite(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM news WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .context("Failed to delete news")?;
    Ok(result.rows_affected() > 0)
}

fn row_to_news_sqlite(row: &sqlx::sqlite::SqliteRow) -> Result<News> {
    Ok(News {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        category: row.try_get("category")?,
        image_url: row.try_get("image_url")?,
        content: row.try_get("content")?,
        date: row.try_get("date")?,
    })
}

// PostgreSQL implementations
//
// `id` is cast so tables created with SERIAL decode the same as BIGSERIAL.
async fn list_postgres(pool: &PgPool) -> Result<Vec<News>> {
    let rows = sqlx::query(
        "SELECT id::BIGINT AS id, title, category, image_url, content, date FROM news ORDER BY date DESC, id DESC",
    )
    .fetch_all(pool)
    .await
    .context("Failed to list news")?;
    rows.iter().map(row_to_news_postgres).collect()
}

async fn get_by_id_postgres(pool: &PgPool, id: i64) -> Result<Option<News>> {
    let row = sqlx::query(
        "SELECT id::BIGINT AS id, title, category, image_url, content, date FROM news WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("Failed to get news")?;
    row.map(|r| row_to_news_postgres(&r)).transpose()
}

async fn create_postgres(pool: &PgPool, input: &NewsInput) -> Result<News> {
    let row = sqlx::query(
        "INSERT INTO news (title, category, image_url, content, date) VALUES ($1, $2, $3, $4, $5) \
         RETURNING id::BIGINT AS id, title, category, image_url, content, date",
    )
    .bind(&input.title)
    .bind(&input.category)
    .bind(&input.image_url)
    .bind(&input.content)
    .bind(input.date)
    .fetch_one(pool)
    .await
    .context("Failed to create news")?;
    row_to_news_postgres(&row)
}

async fn replace_postgres(pool: &PgPool, id: i64, input: &NewsInput) -> Result<Option<News>> {
    let row = sqlx::query(
        "UPDATE news SET title = $1, category = $2, image_url = $3, content = $4, date = $5 WHERE id = $6 \
         RETURNING id::BIGINT AS id, title, category, image_url, content, date",
    )
    .bind(&input.title)
    .bind(&input.category)
    .bind(&input.image_url)
    .bind(&input.content)
    .bind(input.date)
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("Failed to update news")?;
    row.map(|r| row_to_news_postgres(&r)).transpose()
}

async fn delete_postgres(pool: &PgPool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM news WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .context("Failed to delete news")?;
    Ok(result.rows_affected() > 0)
}

fn row_to_news_postgres(row: &sqlx::postgres::PgRow) -> Result<News> {
    Ok(News {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        category: row.try_get("category")?,
        image_url: row.try_get("image_url")?,
        content: row.try_get("content")?,
        date: row.try_get("date")?,
    })
}
