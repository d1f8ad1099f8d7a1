//! Promotional banner slides.

use serde::{Deserialize, Serialize};

use crate::ids::PromotionId;

/// A hero-carousel slide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Promotion {
    pub id: PromotionId,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Call-to-action button label.
    pub cta_text: String,
    pub image: String,
    /// Presentation hints carried through unchanged.
    pub background_color: String,
    pub text_color: String,
}
