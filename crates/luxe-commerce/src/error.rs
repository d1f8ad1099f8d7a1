//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product declares no size or color to fall back on.
    #[error("Product {product_id} has no {axis} to select")]
    NoVariant {
        product_id: String,
        axis: &'static str,
    },

    /// Requested variant is not one the product offers.
    #[error("Product {product_id} does not offer {axis} '{value}'")]
    UnknownVariant {
        product_id: String,
        axis: &'static str,
        value: String,
    },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Rejected user input.
    #[error("Validation error: {0}")]
    Validation(String),
}
