//! The styling capability the storefront depends on.

use async_trait::async_trait;
use luxe_commerce::catalog::Product;

use crate::error::StylistError;
use crate::types::{ChatTurn, ImagePayload, StylingRecommendation};

/// A generative model that recommends catalog products.
///
/// Implementations must only be trusted for text; callers resolve the
/// returned ids against the catalog themselves.
#[async_trait]
pub trait StylingService: Send + Sync {
    /// Free-text advice with the prior conversation as context.
    async fn advise(
        &self,
        query: &str,
        catalog: &[Product],
        history: &[ChatTurn],
    ) -> Result<StylingRecommendation, StylistError>;

    /// Match an uploaded image against the catalog. No conversation context.
    async fn visual_search(
        &self,
        image: &ImagePayload,
        catalog: &[Product],
    ) -> Result<StylingRecommendation, StylistError>;

    /// Items that pair well with `product`.
    async fn suggest_complements(
        &self,
        product: &Product,
        catalog: &[Product],
    ) -> Result<StylingRecommendation, StylistError>;
}
