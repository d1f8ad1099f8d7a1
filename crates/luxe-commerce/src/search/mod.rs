//! Search module.
//!
//! Contains the catalog filter used by the browse grid.

mod filter;

pub use filter::{
    available_colors, CatalogFilter, CategoryFilter, ColorFilter, ALL_LABEL, DEFAULT_MAX_PRICE,
};
