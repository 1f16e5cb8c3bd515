//! News article model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Validate;

/// A stored news article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    pub id: i64,
    pub title: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub content: Option<String>,
    /// Publication date, serialized as `YYYY-MM-DD`
    pub date: Option<NaiveDate>,
}

/// Body of `POST /api/news` and `PUT /api/news/{id}`
///
/// A replace writes every field, so an omitted field is stored as NULL
/// rather than keeping its previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewsInput {
    pub title: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub content: Option<String>,
    pub date: Option<NaiveDate>,
}

impl Validate for NewsInput {}
