//! Database repositories
//!
//! One repository per table. Each method maps to a single parameterized
//! statement; handlers never hold a connection across calls.

pub mod contact;
pub mod feedback;
pub mod news;

pub use contact::{ContactRepository, SqlxContactRepository};
pub use feedback::{FeedbackRepository, SqlxFeedbackRepository};
pub use news::{NewsRepository, SqlxNewsRepository};
