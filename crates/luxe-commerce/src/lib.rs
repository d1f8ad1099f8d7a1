//! Storefront domain types and state for Lumina Luxe.
//!
//! - **Catalog**: Products, categories, reviews and rating aggregation
//! - **Cart**: Variant-keyed cart lines and totals
//! - **Search**: The category / color / price filter
//! - **History**: Recently viewed and wishlist lists, persisted through
//!   [`luxe_cache::KeyValueStore`]
//! - **Compare**: The bounded comparison set
//! - **Storefront**: The state snapshot, intents, and the owner that persists
//!
//! # Example
//!
//! ```rust
//! use luxe_cache::MemoryStore;
//! use luxe_commerce::prelude::*;
//!
//! let mut shop = Storefront::open(MemoryStore::new(), seed::catalog());
//!
//! shop.dispatch(Intent::SelectProduct(ProductId::new("1"))).unwrap();
//! shop.dispatch(Intent::AddToCart {
//!     product_id: ProductId::new("1"),
//!     size: Some("M".to_string()),
//!     color: None,
//! })
//! .unwrap();
//!
//! let state = shop.state();
//! assert_eq!(state.cart_count(), 1);
//! assert_eq!(state.cart_total().unwrap().display(), "$450.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod compare;
pub mod history;
pub mod orders;
pub mod promotion;
pub mod search;
pub mod seed;
pub mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::seed;

    // Catalog
    pub use crate::catalog::{Category, NewReview, Product, Review};

    // Cart
    pub use crate::cart::{Cart, CartItem};

    // Search
    pub use crate::search::{CatalogFilter, CategoryFilter, ColorFilter};

    // History and comparison
    pub use crate::compare::{ComparisonSet, ToggleOutcome};
    pub use crate::history::{RecentlyViewed, Wishlist};

    // Orders and promotions
    pub use crate::orders::{Order, OrderLineItem, OrderStatus};
    pub use crate::promotion::Promotion;

    // Storefront
    pub use crate::storefront::{Intent, Storefront, StorefrontState};
}
