//! Table bootstrapping
//!
//! The schema normally belongs to the database administrator. For local
//! development and tests the three tables can be created here with
//! `CREATE TABLE IF NOT EXISTS`; existing tables are never altered.

use anyhow::{Context, Result};

use super::DynDatabasePool;
use crate::config::DatabaseDriver;

/// A table definition with SQL for both backends
#[derive(Debug, Clone)]
pub struct TableDef {
    pub name: &'static str,
    pub create_sqlite: &'static str,
    pub create_postgres: &'static str,
}

pub const TABLES: &[TableDef] = &[
    TableDef {
        name: "news",
        create_sqlite: r#"
            CREATE TABLE IF NOT EXISTS news (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT,
                category TEXT,
                image_url TEXT,
                content TEXT,
                date TEXT
            )
        "#,
        create_postgres: r#"
            CREATE TABLE IF NOT EXISTS news (
                id BIGSERIAL PRIMARY KEY,
                title TEXT,
                category TEXT,
                image_url TEXT,
                content TEXT,
                date DATE
            )
        "#,
    },
    TableDef {
        name: "contact_messages",
        create_sqlite: r#"
            CREATE TABLE IF NOT EXISTS contact_messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT,
                last_name TEXT,
                email TEXT,
                phone TEXT,
                subject TEXT,
                message TEXT
            )
        "#,
        create_postgres: r#"
            CREATE TABLE IF NOT EXISTS contact_messages (
                id BIGSERIAL PRIMARY KEY,
                first_name TEXT,
                last_name TEXT,
                email TEXT,
                phone TEXT,
                subject TEXT,
                message TEXT
            )
        "#,
    },
    TableDef {
        name: "feedback",
        create_sqlite: r#"
            CREATE TABLE IF NOT EXISTS feedback (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                email TEXT,
                rating INTEGER,
                message TEXT
            )
        "#,
        create_postgres: r#"
            CREATE TABLE IF NOT EXISTS feedback (
                id BIGSERIAL PRIMARY KEY,
                name TEXT,
                email TEXT,
                rating INTEGER,
                message TEXT
            )
        "#,
    },
];

/// Create every missing table. Returns the number of statements executed.
pub async fn create_tables(pool: &DynDatabasePool) -> Result<usize> {
    for table in TABLES {
        let sql = match pool.driver() {
            DatabaseDriver::Sqlite => table.create_sqlite,
            DatabaseDriver::Postgres => table.create_postgres,
        };
        pool.execute(sql)
            .await
            .with_context(|| format!("Failed to create table: {}", table.name))?;
        tracing::debug!("Ensured table {}", table.name);
    }
    Ok(TABLES.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_test_pool;
    use sqlx::Row;

    #[tokio::test]
    async fn test_create_tables_is_idempotent() {
        let pool = create_test_pool().await.expect("Failed to create pool");

        assert_eq!(create_tables(&pool).await.unwrap(), 3);
        assert_eq!(create_tables(&pool).await.unwrap(), 3);

        let rows = sqlx::query(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('news', 'contact_messages', 'feedback') ORDER BY name",
        )
        .fetch_all(pool.as_sqlite().unwrap())
        .await
        .unwrap();
        let names: Vec<String> = rows.iter().map(|r| r.get("name")).collect();
        assert_eq!(names, vec!["contact_messages", "feedback", "news"]);
    }
}
