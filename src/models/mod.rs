//! Data models
//!
//! Row types returned by the repositories and the request schemas accepted
//! by the HTTP layer:
//! - News articles (full CRUD)
//! - Contact messages (create only)
//! - Feedback submissions (create only)

mod contact;
mod feedback;
mod news;

pub use contact::{ContactMessage, CreateContactInput};
pub use feedback::{CreateFeedbackInput, Feedback, RATING_MAX, RATING_MIN};
pub use news::{News, NewsInput};

/// A request body failed a rule that JSON typing alone cannot express
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}

/// Boundary checks run on every request schema after deserialization
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
