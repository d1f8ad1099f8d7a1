//! Shopping cart module.
//!
//! Contains the cart and its variant-keyed lines.

mod cart;

pub use cart::{Cart, CartItem, MIN_QUANTITY};
