//! Product types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{average_rating, NewReview, Review};
use crate::error::CommerceError;
use crate::ids::{ProductId, ReviewId};
use crate::money::Money;

/// Department a product is shelved under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Men,
    Women,
    Accessories,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Men, Category::Women, Category::Accessories];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Men => "Men",
            Category::Women => "Women",
            Category::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "men" => Ok(Category::Men),
            "women" => Ok(Category::Women),
            "accessories" => Ok(Category::Accessories),
            other => Err(CommerceError::Validation(format!("unknown category '{other}'"))),
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand or atelier.
    pub brand: String,
    /// Department.
    pub category: Category,
    /// Unit price.
    pub price: Money,
    /// Marketing description.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Available colors, in display order. The first is the default.
    pub colors: Vec<String>,
    /// Available sizes, in display order. The first is the default.
    pub sizes: Vec<String>,
    /// Aggregate rating, one decimal place.
    pub rating: f64,
    /// Customer reviews, oldest submission last.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Check if the product comes in the given color.
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Check if the product comes in the given size.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Default size (first declared).
    pub fn default_size(&self) -> Option<&str> {
        self.sizes.first().map(String::as_str)
    }

    /// Default color (first declared).
    pub fn default_color(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }

    /// Append a review and recompute the aggregate rating.
    ///
    /// The review gets a fresh id and `today` as its date. The rating becomes
    /// the mean of all review ratings rounded to one decimal place.
    pub fn add_review(&mut self, review: NewReview, today: NaiveDate) -> Result<&Review, CommerceError> {
        review.validate()?;

        self.reviews.push(Review {
            id: ReviewId::generate(),
            user: review.user.trim().to_string(),
            rating: review.rating,
            comment: review.comment.trim().to_string(),
            date: today,
        });

        if let Some(avg) = average_rating(&self.reviews) {
            self.rating = avg;
        }

        // Just pushed, so the list is non-empty.
        let idx = self.reviews.len() - 1;
        Ok(&self.reviews[idx])
    }

    /// Number of reviews.
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new("1"),
            name: "Midnight Silk Blazer".to_string(),
            brand: "Noir Atelier".to_string(),
            category: Category::Men,
            price: Money::usd(450),
            description: "A tailored blazer.".to_string(),
            image: "blazer.jpg".to_string(),
            colors: vec!["Midnight Black".to_string(), "Deep Navy".to_string()],
            sizes: vec!["S".to_string(), "M".to_string()],
            rating: 4.9,
            reviews: Vec::new(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("women".parse::<Category>().unwrap(), Category::Women);
        assert_eq!("Accessories".parse::<Category>().unwrap(), Category::Accessories);
        assert!("kids".parse::<Category>().is_err());
    }

    #[test]
    fn test_variant_defaults() {
        let p = sample();
        assert_eq!(p.default_size(), Some("S"));
        assert_eq!(p.default_color(), Some("Midnight Black"));
        assert!(p.has_color("Deep Navy"));
        assert!(!p.has_size("XL"));
    }

    #[test]
    fn test_add_review_recomputes_rating() {
        let mut p = sample();
        for rating in [5, 4, 4] {
            p.add_review(NewReview::new("Ann", rating, "Lovely"), date())
                .unwrap();
        }
        // mean(5, 4, 4) = 4.333.. -> 4.3
        assert_eq!(p.rating, 4.3);
        assert_eq!(p.review_count(), 3);
    }

    #[test]
    fn test_add_review_assigns_id_and_date() {
        let mut p = sample();
        let review = p
            .add_review(NewReview::new("  Ann  ", 5, "Great fit"), date())
            .unwrap();
        assert_eq!(review.user, "Ann");
        assert_eq!(review.date, date());
        assert!(!review.id.as_str().is_empty());
    }

    #[test]
    fn test_invalid_review_is_not_appended() {
        let mut p = sample();
        assert!(p.add_review(NewReview::new("", 5, "x"), date()).is_err());
        assert!(p.add_review(NewReview::new("Ann", 5, "   "), date()).is_err());
        assert!(p.reviews.is_empty());
        assert_eq!(p.rating, 4.9);
    }
}
