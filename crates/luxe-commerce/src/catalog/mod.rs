//! Catalog module.
//!
//! Contains product and review types.

mod product;
mod review;

pub use product::{Category, Product};
pub use review::{average_rating, NewReview, Review, MAX_RATING, MIN_RATING};
