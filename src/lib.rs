//! newsdesk - a small JSON API over a relational database
//!
//! Serves news articles (full CRUD), contact messages and feedback
//! submissions (create only). Each request maps to exactly one
//! parameterized SQL statement.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
