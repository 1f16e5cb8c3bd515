//! Feedback submission model

use serde::{Deserialize, Serialize};

use super::{Validate, ValidationError};

pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;

/// A stored feedback submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub rating: Option<i32>,
    pub message: Option<String>,
}

/// Body of `POST /api/feedback`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateFeedbackInput {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Whole-star rating. Optional, but when present it must be in range.
    pub rating: Option<i32>,
    pub message: Option<String>,
}

impl Validate for CreateFeedbackInput {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.rating {
            Some(r) if !(RATING_MIN..=RATING_MAX).contains(&r) => {
                Err(ValidationError::OutOfRange {
                    field: "rating",
                    min: RATING_MIN.into(),
                    max: RATING_MAX.into(),
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_rating(rating: Option<i32>) -> CreateFeedbackInput {
        CreateFeedbackInput {
            rating,
            ..Default::default()
        }
    }

    #[test]
    fn test_rating_bounds() {
        assert!(with_rating(Some(1)).validate().is_ok());
        assert!(with_rating(Some(5)).validate().is_ok());
        assert!(with_rating(None).validate().is_ok());

        let err = with_rating(Some(0)).validate().unwrap_err();
        assert_eq!(err.to_string(), "rating must be between 1 and 5");
        assert!(with_rating(Some(6)).validate().is_err());
    }

    #[test]
    fn test_fractional_rating_is_a_type_error() {
        let result = serde_json::from_str::<CreateFeedbackInput>(r#"{"rating":4.5}"#);
        assert!(result.is_err());
    }
}
