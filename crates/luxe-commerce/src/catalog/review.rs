//! Customer reviews.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::ReviewId;

/// Lowest accepted star rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted star rating.
pub const MAX_RATING: u8 = 5;

/// A stored review. Never edited or deleted once appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    /// Display name of the author.
    pub user: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub comment: String,
    /// Submission date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
}

/// A review as submitted through the form, before it gets an id and date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewReview {
    pub user: String,
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    pub fn new(user: impl Into<String>, rating: u8, comment: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            rating,
            comment: comment.into(),
        }
    }

    /// Reject blank names, blank comments and out-of-range ratings.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.user.trim().is_empty() {
            return Err(CommerceError::Validation("review name is empty".to_string()));
        }
        if self.comment.trim().is_empty() {
            return Err(CommerceError::Validation("review comment is empty".to_string()));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(CommerceError::Validation(format!(
                "rating {} outside {}..={}",
                self.rating, MIN_RATING, MAX_RATING
            )));
        }
        Ok(())
    }
}

/// Mean rating rounded to one decimal, `None` for an empty list.
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let mean = f64::from(sum) / reviews.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> Review {
        Review {
            id: ReviewId::generate(),
            user: "u".to_string(),
            rating,
            comment: "c".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_average_empty_is_none() {
        assert_eq!(average_rating(&[]), None);
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        let reviews = vec![review(5), review(4)];
        assert_eq!(average_rating(&reviews), Some(4.5));

        let reviews = vec![review(5), review(5), review(4)];
        assert_eq!(average_rating(&reviews), Some(4.7));

        let reviews = vec![review(1), review(2), review(2)];
        assert_eq!(average_rating(&reviews), Some(1.7));
    }

    #[test]
    fn test_validate_rating_bounds() {
        assert!(NewReview::new("a", 0, "c").validate().is_err());
        assert!(NewReview::new("a", 6, "c").validate().is_err());
        assert!(NewReview::new("a", 1, "c").validate().is_ok());
        assert!(NewReview::new("a", 5, "c").validate().is_ok());
    }

    #[test]
    fn test_review_date_serializes_as_iso_day() {
        let json = serde_json::to_value(review(3)).unwrap();
        assert_eq!(json["date"], "2024-01-01");
    }
}
