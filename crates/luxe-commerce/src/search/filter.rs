//! Catalog filter.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Product};
use crate::money::Money;

/// Upper end of the price slider; also the default ceiling.
pub const DEFAULT_MAX_PRICE: Money = Money::usd(1500);

/// Label used for the "no restriction" choice in category and color pickers.
pub const ALL_LABEL: &str = "All";

/// Category predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

/// Color predicate: the product must offer the color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColorFilter {
    #[default]
    All,
    Only(String),
}

impl ColorFilter {
    /// Parse a picker label; `"All"` means no restriction.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            ColorFilter::All
        } else {
            ColorFilter::Only(label.to_string())
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ColorFilter::All => true,
            ColorFilter::Only(color) => product.has_color(color),
        }
    }
}

/// The three independent browse predicates.
///
/// A product is shown when it passes all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub category: CategoryFilter,
    pub color: ColorFilter,
    /// Inclusive price ceiling.
    pub max_price: Money,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            color: ColorFilter::All,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_color(mut self, color: ColorFilter) -> Self {
        self.color = color;
        self
    }

    pub fn with_max_price(mut self, max_price: Money) -> Self {
        self.max_price = max_price;
        self
    }

    /// Check a single product against all predicates.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product.category)
            && self.color.matches(product)
            && product.price.amount_cents <= self.max_price.amount_cents
    }

    /// Products passing every predicate, in catalog order.
    ///
    /// An empty result is a normal outcome.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    /// Restore the defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when any predicate differs from its default.
    pub fn has_active_filters(&self) -> bool {
        self.category != CategoryFilter::All
            || self.color != ColorFilter::All
            || self.max_price.amount_cents < DEFAULT_MAX_PRICE.amount_cents
    }
}

/// Color picker entries: `"All"` followed by every distinct color, sorted.
pub fn available_colors(products: &[Product]) -> Vec<String> {
    let colors: BTreeSet<&str> = products
        .iter()
        .flat_map(|p| p.colors.iter().map(String::as_str))
        .collect();

    std::iter::once(ALL_LABEL.to_string())
        .chain(colors.into_iter().map(str::to_string))
        .collect()
}
