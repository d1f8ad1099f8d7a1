//! Storefront state owner.
//!
//! [`StorefrontState`] is an immutable snapshot of everything the shopper can
//! see. Changes are expressed as [`Intent`]s and applied with
//! [`StorefrontState::reduce`], which returns a new snapshot. [`Storefront`]
//! holds the current snapshot together with a key-value store, and writes the
//! recently viewed and wishlist lists back whenever an intent changes them.

use chrono::NaiveDate;
use luxe_cache::{Cache, KeyValueStore};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::cart::Cart;
use crate::catalog::{NewReview, Product};
use crate::compare::{ComparisonSet, ToggleOutcome};
use crate::error::CommerceError;
use crate::history::{recently_viewed_key, wishlist_key, PersistedIds, RecentlyViewed, Wishlist};
use crate::ids::ProductId;
use crate::money::Money;
use crate::search::{available_colors, CatalogFilter, CategoryFilter, ColorFilter};

/// A request to change storefront state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    /// Open a product's detail view; also records it as recently viewed.
    SelectProduct(ProductId),
    CloseProduct,
    ToggleWishlist(ProductId),
    ClearRecentlyViewed,
    AddToCart {
        product_id: ProductId,
        size: Option<String>,
        color: Option<String>,
    },
    UpdateQuantity {
        product_id: ProductId,
        size: String,
        color: String,
        delta: i64,
    },
    RemoveFromCart {
        product_id: ProductId,
        size: String,
        color: String,
    },
    ToggleComparison(ProductId),
    ClearComparison,
    AddReview {
        product_id: ProductId,
        review: NewReview,
    },
    SetCategory(CategoryFilter),
    SetColor(ColorFilter),
    SetMaxPrice(Money),
    ResetFilters,
}

/// Everything the storefront shows, at one point in time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StorefrontState {
    pub catalog: Vec<Product>,
    pub cart: Cart,
    pub comparison: ComparisonSet,
    pub recently_viewed: RecentlyViewed,
    pub wishlist: Wishlist,
    pub filter: CatalogFilter,
    pub selected: Option<ProductId>,
}

impl StorefrontState {
    /// Fresh state over a catalog with nothing selected or saved.
    pub fn new(catalog: Vec<Product>) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Apply an intent, returning the next snapshot.
    ///
    /// `self` is left untouched; on error nothing changes. `today` stamps new
    /// reviews.
    pub fn reduce(&self, intent: Intent, today: NaiveDate) -> Result<StorefrontState, CommerceError> {
        let mut next = self.clone();

        match intent {
            Intent::SelectProduct(id) => {
                next.require(&id)?;
                next.recently_viewed.record(id.clone());
                next.selected = Some(id);
            }
            Intent::CloseProduct => next.selected = None,
            Intent::ToggleWishlist(id) => {
                next.require(&id)?;
                next.wishlist.toggle(&id);
            }
            Intent::ClearRecentlyViewed => next.recently_viewed.clear(),
            Intent::AddToCart {
                product_id,
                size,
                color,
            } => {
                let product = next.require(&product_id)?.clone();
                next.cart.add(&product, size.as_deref(), color.as_deref())?;
            }
            Intent::UpdateQuantity {
                product_id,
                size,
                color,
                delta,
            } => {
                next.cart.update_quantity(&product_id, &size, &color, delta);
            }
            Intent::RemoveFromCart {
                product_id,
                size,
                color,
            } => {
                next.cart.remove(&product_id, &size, &color);
            }
            Intent::ToggleComparison(id) => {
                next.require(&id)?;
                if next.comparison.toggle(&id) == ToggleOutcome::AtCapacity {
                    debug!(product_id = %id, "Comparison set full, ignoring");
                }
            }
            Intent::ClearComparison => next.comparison.clear(),
            Intent::AddReview { product_id, review } => {
                let product = next
                    .catalog
                    .iter_mut()
                    .find(|p| p.id == product_id)
                    .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))?;
                product.add_review(review, today)?;
            }
            Intent::SetCategory(category) => next.filter.category = category,
            Intent::SetColor(color) => next.filter.color = color,
            Intent::SetMaxPrice(max_price) => next.filter.max_price = max_price,
            Intent::ResetFilters => next.filter.reset(),
        }

        Ok(next)
    }

    fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.find_product(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    pub fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.iter().find(|p| &p.id == id)
    }

    /// Catalog filtered by the current filter, in catalog order.
    pub fn filtered_products(&self) -> Vec<&Product> {
        self.filter.apply(&self.catalog)
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected.as_ref().and_then(|id| self.find_product(id))
    }

    /// Compared products in catalog order, whatever order they were picked in.
    pub fn comparison_products(&self) -> Vec<&Product> {
        self.in_catalog_order(|p| self.comparison.contains(&p.id))
    }

    /// Saved products in catalog order.
    pub fn wishlist_products(&self) -> Vec<&Product> {
        self.in_catalog_order(|p| self.wishlist.contains(&p.id))
    }

    /// Most recent first. Ids no longer in the catalog are skipped.
    pub fn recently_viewed_products(&self) -> Vec<&Product> {
        self.resolve(self.recently_viewed.ids())
    }

    pub fn is_wishlisted(&self, id: &ProductId) -> bool {
        self.wishlist.contains(id)
    }

    pub fn available_colors(&self) -> Vec<String> {
        available_colors(&self.catalog)
    }

    pub fn cart_count(&self) -> i64 {
        self.cart.item_count()
    }

    pub fn cart_total(&self) -> Result<Money, CommerceError> {
        self.cart.total()
    }

    fn resolve(&self, ids: &[ProductId]) -> Vec<&Product> {
        ids.iter().filter_map(|id| self.find_product(id)).collect()
    }

    fn in_catalog_order(&self, keep: impl Fn(&Product) -> bool) -> Vec<&Product> {
        self.catalog.iter().filter(|p| keep(p)).collect()
    }
}

/// Owns the current [`StorefrontState`] and keeps the persisted lists in sync.
pub struct Storefront<S: KeyValueStore> {
    cache: Cache<S>,
    state: StorefrontState,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Start a session, restoring the recently viewed list and wishlist.
    ///
    /// Missing or corrupt stored lists start empty.
    pub fn open(store: S, catalog: Vec<Product>) -> Self {
        let cache = Cache::new(store);
        let mut state = StorefrontState::new(catalog);
        state.recently_viewed =
            RecentlyViewed::from_ids(PersistedIds::new(&cache, recently_viewed_key()).load());
        state.wishlist = Wishlist::from_ids(PersistedIds::new(&cache, wishlist_key()).load());

        debug!(
            recently_viewed = state.recently_viewed.len(),
            wishlist = state.wishlist.len(),
            "Opened storefront"
        );

        Self { cache, state }
    }

    pub fn state(&self) -> &StorefrontState {
        &self.state
    }

    pub fn store(&self) -> &S {
        self.cache.store()
    }

    /// Apply an intent dated today in local time.
    pub fn dispatch(&mut self, intent: Intent) -> Result<&StorefrontState, CommerceError> {
        self.dispatch_on(intent, chrono::Local::now().date_naive())
    }

    /// Apply an intent with an explicit date for new reviews.
    ///
    /// Storage failures are logged, never returned.
    #[instrument(skip(self, today))]
    pub fn dispatch_on(
        &mut self,
        intent: Intent,
        today: NaiveDate,
    ) -> Result<&StorefrontState, CommerceError> {
        let next = self.state.reduce(intent, today)?;

        if next.recently_viewed != self.state.recently_viewed {
            let stored = PersistedIds::new(&self.cache, recently_viewed_key());
            if next.recently_viewed.is_empty() {
                stored.clear();
            } else {
                stored.save(next.recently_viewed.ids());
            }
        }
        if next.wishlist != self.state.wishlist {
            PersistedIds::new(&self.cache, wishlist_key()).save(next.wishlist.ids());
        }

        self.state = next;
        Ok(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::compare::MAX_COMPARISON;
    use crate::seed;
    use luxe_cache::MemoryStore;
    use std::sync::Arc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    fn state() -> StorefrontState {
        StorefrontState::new(seed::catalog())
    }

    #[test]
    fn test_reduce_does_not_mutate() {
        let before = state();
        let after = before
            .reduce(Intent::SelectProduct(id("2")), today())
            .unwrap();
        assert!(before.selected.is_none());
        assert!(before.recently_viewed.is_empty());
        assert_eq!(after.selected_product().unwrap().name, "Ethereal Flow Maxi Dress");
        assert_eq!(after.recently_viewed.ids(), &[id("2")]);
    }

    #[test]
    fn test_unknown_product_rejected() {
        let err = state()
            .reduce(Intent::SelectProduct(id("404")), today())
            .unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound("404".to_string()));
    }

    #[test]
    fn test_close_product_keeps_history() {
        let s = state()
            .reduce(Intent::SelectProduct(id("1")), today())
            .unwrap()
            .reduce(Intent::CloseProduct, today())
            .unwrap();
        assert!(s.selected_product().is_none());
        assert_eq!(s.recently_viewed_products()[0].id, id("1"));
    }

    #[test]
    fn test_cart_flow() {
        let s = state()
            .reduce(
                Intent::AddToCart {
                    product_id: id("1"),
                    size: None,
                    color: None,
                },
                today(),
            )
            .unwrap()
            .reduce(
                Intent::UpdateQuantity {
                    product_id: id("1"),
                    size: "S".to_string(),
                    color: "Midnight Black".to_string(),
                    delta: 2,
                },
                today(),
            )
            .unwrap();
        assert_eq!(s.cart_count(), 3);
        assert_eq!(s.cart_total().unwrap(), Money::usd(1350));

        let s = s
            .reduce(
                Intent::RemoveFromCart {
                    product_id: id("1"),
                    size: "S".to_string(),
                    color: "Midnight Black".to_string(),
                },
                today(),
            )
            .unwrap();
        assert!(s.cart.is_empty());
    }

    #[test]
    fn test_comparison_cap_is_silent() {
        let mut s = state();
        for n in 1..=6 {
            s = s
                .reduce(Intent::ToggleComparison(id(&n.to_string())), today())
                .unwrap();
        }
        assert_eq!(s.comparison_products().len(), MAX_COMPARISON);
        assert!(s.comparison.can_compare());
        let s = s.reduce(Intent::ClearComparison, today()).unwrap();
        assert!(s.comparison.is_empty());
    }

    #[test]
    fn test_review_updates_rating() {
        let s = state()
            .reduce(
                Intent::AddReview {
                    product_id: id("1"),
                    review: NewReview::new("Ava", 3, "Runs small."),
                },
                today(),
            )
            .unwrap();
        let product = s.find_product(&id("1")).unwrap();
        assert_eq!(product.review_count(), 3);
        // (5 + 4 + 3) / 3
        assert_eq!(product.rating, 4.0);
        assert_eq!(product.reviews[2].date, today());
    }

    #[test]
    fn test_invalid_review_leaves_state() {
        let before = state();
        let err = before
            .reduce(
                Intent::AddReview {
                    product_id: id("3"),
                    review: NewReview::new("  ", 5, "Lovely"),
                },
                today(),
            )
            .unwrap_err();
        assert!(matches!(err, CommerceError::Validation(_)));
        assert_eq!(before.find_product(&id("3")).unwrap().review_count(), 0);
    }

    #[test]
    fn test_filters() {
        let s = state()
            .reduce(Intent::SetCategory(CategoryFilter::Only(Category::Women)), today())
            .unwrap()
            .reduce(Intent::SetMaxPrice(Money::usd(200)), today())
            .unwrap();
        let names: Vec<_> = s.filtered_products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Cirrus Silk Blouse"]);

        let s = s.reduce(Intent::ResetFilters, today()).unwrap();
        assert_eq!(s.filtered_products().len(), 8);
    }

    #[test]
    fn test_storefront_persists_lists() {
        let store = Arc::new(MemoryStore::new());
        let mut shop = Storefront::open(Arc::clone(&store), seed::catalog());
        shop.dispatch_on(Intent::SelectProduct(id("3")), today()).unwrap();
        shop.dispatch_on(Intent::SelectProduct(id("5")), today()).unwrap();
        shop.dispatch_on(Intent::ToggleWishlist(id("4")), today()).unwrap();

        assert_eq!(
            store.get("lumina-luxe-recently-viewed").unwrap().as_deref(),
            Some(r#"["5","3"]"#)
        );
        assert_eq!(
            store.get("lumina-luxe-wishlist").unwrap().as_deref(),
            Some(r#"["4"]"#)
        );

        let reopened = Storefront::open(Arc::clone(&store), seed::catalog());
        assert_eq!(reopened.state().recently_viewed.ids(), &[id("5"), id("3")]);
        assert!(reopened.state().is_wishlisted(&id("4")));
    }

    #[test]
    fn test_wishlist_double_toggle_restores_stored_list() {
        let store = Arc::new(MemoryStore::new());
        store.set("lumina-luxe-wishlist", r#"["2"]"#).unwrap();
        let mut shop = Storefront::open(Arc::clone(&store), seed::catalog());

        shop.dispatch_on(Intent::ToggleWishlist(id("4")), today()).unwrap();
        assert_eq!(
            store.get("lumina-luxe-wishlist").unwrap().as_deref(),
            Some(r#"["2","4"]"#)
        );

        shop.dispatch_on(Intent::ToggleWishlist(id("4")), today()).unwrap();
        assert_eq!(
            store.get("lumina-luxe-wishlist").unwrap().as_deref(),
            Some(r#"["2"]"#)
        );
        assert_eq!(shop.state().wishlist.ids(), &[id("2")]);
    }

    #[test]
    fn test_picked_lists_follow_catalog_order() {
        let s = state()
            .reduce(Intent::ToggleComparison(id("3")), today())
            .unwrap()
            .reduce(Intent::ToggleComparison(id("1")), today())
            .unwrap()
            .reduce(Intent::ToggleWishlist(id("6")), today())
            .unwrap()
            .reduce(Intent::ToggleWishlist(id("2")), today())
            .unwrap();
        fn ids(products: Vec<&Product>) -> Vec<&str> {
            products.into_iter().map(|p| p.id.as_str()).collect()
        }
        assert_eq!(ids(s.comparison_products()), vec!["1", "3"]);
        assert_eq!(ids(s.wishlist_products()), vec!["2", "6"]);
        assert_eq!(s.comparison.ids(), &[id("3"), id("1")]);
    }

    #[test]
    fn test_clear_recently_viewed_deletes_key() {
        let store = Arc::new(MemoryStore::new());
        let mut shop = Storefront::open(Arc::clone(&store), seed::catalog());
        shop.dispatch_on(Intent::SelectProduct(id("1")), today()).unwrap();
        shop.dispatch_on(Intent::ClearRecentlyViewed, today()).unwrap();
        assert!(!store.exists("lumina-luxe-recently-viewed").unwrap());
    }

    #[test]
    fn test_open_tolerates_corrupt_lists() {
        let store = MemoryStore::new();
        store.set("lumina-luxe-recently-viewed", "not json").unwrap();
        store.set("lumina-luxe-wishlist", r#"{"ids":1}"#).unwrap();
        let shop = Storefront::open(store, seed::catalog());
        assert!(shop.state().recently_viewed.is_empty());
        assert!(shop.state().wishlist.is_empty());
    }

    #[test]
    fn test_failed_intent_keeps_state() {
        let mut shop = Storefront::open(MemoryStore::new(), seed::catalog());
        assert!(shop
            .dispatch_on(Intent::ToggleWishlist(id("nope")), today())
            .is_err());
        assert!(shop.state().wishlist.is_empty());
    }

    #[test]
    fn test_stale_ids_skipped() {
        let store = MemoryStore::new();
        store.set("lumina-luxe-wishlist", r#"["99","2"]"#).unwrap();
        let shop = Storefront::open(store, seed::catalog());
        let names: Vec<_> = shop
            .state()
            .wishlist_products()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(names, vec!["2"]);
    }
}
