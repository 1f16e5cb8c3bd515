//! Database layer
//!
//! Supports PostgreSQL (production) and SQLite (development and tests)
//! behind the [`DatabasePool`] trait. Repositories in [`repositories`] hold a
//! shared pool and issue exactly one parameterized statement per call.
//!
//! ```ignore
//! use newsdesk::config::DatabaseConfig;
//! use newsdesk::db::{create_pool, schema};
//!
//! let pool = create_pool(&DatabaseConfig::default()).await?;
//! schema::create_tables(&pool).await?;
//! pool.ping().await?;
//! ```

pub mod pool;
pub mod repositories;
pub mod schema;

pub use pool::{
    create_pool, create_test_pool, Backend, DatabasePool, DynDatabasePool, PostgresDatabase,
    SqliteDatabase,
};
