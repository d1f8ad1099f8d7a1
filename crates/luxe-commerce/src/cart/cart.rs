//! Cart and cart item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Lowest quantity a cart line can hold. Decrements floor here.
pub const MIN_QUANTITY: i64 = 1;

/// A shopping cart.
///
/// Lines are keyed by (product id, size, color); adding the same variant again
/// bumps the quantity instead of adding a second line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Lines in insertion order.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product variant.
    ///
    /// A missing size or color resolves to the product's first declared one.
    /// Returns an error if the product declares no variant on that axis, or if
    /// an explicit choice is not offered.
    pub fn add(
        &mut self,
        product: &Product,
        size: Option<&str>,
        color: Option<&str>,
    ) -> Result<(), CommerceError> {
        let size = resolve_variant(product, "size", size, &product.sizes)?;
        let color = resolve_variant(product, "color", color, &product.colors)?;

        if let Some(existing) = self.find_mut(&product.id, &size, &color) {
            existing.quantity = existing
                .quantity
                .checked_add(1)
                .ok_or(CommerceError::Overflow)?;
            return Ok(());
        }

        self.items.push(CartItem {
            product: product.clone(),
            quantity: MIN_QUANTITY,
            selected_size: size,
            selected_color: color,
        });
        Ok(())
    }

    /// Adjust a line's quantity by `delta`, never going below one.
    ///
    /// Returns `false` if no line matches.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        size: &str,
        color: &str,
        delta: i64,
    ) -> bool {
        match self.find_mut(product_id, size, color) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(delta).max(MIN_QUANTITY);
                true
            }
            None => false,
        }
    }

    /// Remove a line outright.
    pub fn remove(&mut self, product_id: &ProductId, size: &str, color: &str) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| !i.matches(product_id, size, color));
        self.items.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get a line by its variant key.
    pub fn get(&self, product_id: &ProductId, size: &str, color: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.matches(product_id, size, color))
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of unit price times quantity over all lines.
    ///
    /// Tax and shipping belong to checkout and are not included.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.items.iter().try_fold(Money::zero(Currency::USD), |total, item| {
            total
                .try_add(&item.line_total()?)
                .ok_or(CommerceError::Overflow)
        })
    }

    fn find_mut(&mut self, product_id: &ProductId, size: &str, color: &str) -> Option<&mut CartItem> {
        self.items
            .iter_mut()
            .find(|i| i.matches(product_id, size, color))
    }
}

fn resolve_variant(
    product: &Product,
    axis: &'static str,
    requested: Option<&str>,
    offered: &[String],
) -> Result<String, CommerceError> {
    match requested {
        Some(value) if offered.iter().any(|o| o == value) => Ok(value.to_string()),
        Some(value) => Err(CommerceError::UnknownVariant {
            product_id: product.id.to_string(),
            axis,
            value: value.to_string(),
        }),
        None => offered
            .first()
            .cloned()
            .ok_or_else(|| CommerceError::NoVariant {
                product_id: product.id.to_string(),
                axis,
            }),
    }
}

/// A line in the cart: a product snapshot plus the chosen variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product as it was when added.
    pub product: Product,
    /// Quantity, always at least one.
    pub quantity: i64,
    pub selected_size: String,
    pub selected_color: String,
}

impl CartItem {
    /// Unit price times quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }

    fn matches(&self, product_id: &ProductId, size: &str, color: &str) -> bool {
        &self.product.id == product_id && self.selected_size == size && self.selected_color == color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn product(id: &str, dollars: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            brand: "Lumina".to_string(),
            category: Category::Women,
            price: Money::usd(dollars),
            description: String::new(),
            image: String::new(),
            colors: vec!["Cream".to_string(), "Sage Green".to_string()],
            sizes: vec!["S".to_string(), "M".to_string()],
            rating: 4.5,
            reviews: Vec::new(),
        }
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total().unwrap(), Money::usd(0));
    }

    #[test]
    fn test_add_resolves_default_variant() {
        let mut cart = Cart::new();
        cart.add(&product("2", 320), None, None).unwrap();
        let item = &cart.items[0];
        assert_eq!(item.selected_size, "S");
        assert_eq!(item.selected_color, "Cream");
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_add_same_variant_twice_merges() {
        let mut cart = Cart::new();
        let p = product("2", 320);
        cart.add(&p, Some("M"), Some("Sage Green")).unwrap();
        cart.add(&p, Some("M"), Some("Sage Green")).unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_default_and_explicit_first_variant_merge() {
        let mut cart = Cart::new();
        let p = product("2", 320);
        cart.add(&p, None, None).unwrap();
        cart.add(&p, Some("S"), Some("Cream")).unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_different_variants_are_separate_lines() {
        let mut cart = Cart::new();
        let p = product("2", 320);
        cart.add(&p, Some("S"), None).unwrap();
        cart.add(&p, Some("M"), None).unwrap();
        assert_eq!(cart.items.len(), 2);
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let mut cart = Cart::new();
        let err = cart.add(&product("2", 320), Some("XXL"), None).unwrap_err();
        assert!(matches!(err, CommerceError::UnknownVariant { axis: "size", .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_product_without_sizes_rejected() {
        let mut cart = Cart::new();
        let mut p = product("9", 10);
        p.sizes.clear();
        let err = cart.add(&p, None, None).unwrap_err();
        assert!(matches!(err, CommerceError::NoVariant { axis: "size", .. }));
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut cart = Cart::new();
        let p = product("2", 320);
        cart.add(&p, None, None).unwrap();

        assert!(cart.update_quantity(&p.id, "S", "Cream", -1));
        assert_eq!(cart.items[0].quantity, 1);

        cart.update_quantity(&p.id, "S", "Cream", 3);
        assert_eq!(cart.items[0].quantity, 4);

        cart.update_quantity(&p.id, "S", "Cream", -10);
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn test_update_unknown_line() {
        let mut cart = Cart::new();
        assert!(!cart.update_quantity(&ProductId::new("x"), "S", "Cream", 1));
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        let p = product("2", 320);
        cart.add(&p, None, None).unwrap();
        assert!(cart.remove(&p.id, "S", "Cream"));
        assert!(cart.is_empty());
        assert!(!cart.remove(&p.id, "S", "Cream"));
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::new();
        let a = product("1", 450);
        let b = product("3", 210);
        cart.add(&a, None, None).unwrap();
        cart.add(&a, None, None).unwrap();
        cart.add(&b, None, None).unwrap();

        // 2 * 450 + 1 * 210
        assert_eq!(cart.total().unwrap(), Money::usd(1110));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_total_overflow() {
        let mut cart = Cart::new();
        let mut a = product("1", 0);
        a.price = Money::new(i64::MAX, Currency::USD);
        cart.add(&a, None, None).unwrap();
        cart.add(&product("3", 210), None, None).unwrap();

        assert!(matches!(cart.total(), Err(CommerceError::Overflow)));
    }
}
