//! Generative-AI stylist for the Lumina Luxe storefront.
//!
//! The storefront asks a [`StylingService`] for product recommendations in
//! three shapes: free-text advice, visual search from an uploaded image, and
//! "complete the look" pairings. [`GeminiStylist`] implements the service on
//! top of the Gemini REST API; [`StylistSession`] drives one conversation.
//!
//! The model is only trusted for text. Recommended ids are resolved against
//! the catalog and unknown ids are dropped.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use luxe_commerce::seed;
//! use luxe_stylist::{GeminiStylist, StylistSession};
//!
//! # async fn run() -> Result<(), luxe_stylist::StylistError> {
//! let catalog = seed::catalog();
//! let stylist = Arc::new(GeminiStylist::from_env()?);
//! let session = StylistSession::open(stylist, None);
//!
//! if let Some(reply) = session.send("Something for a winter gala?", &catalog).await {
//!     println!("{}", reply.text);
//!     for product in &reply.products {
//!         println!("  - {} ({})", product.name, product.price.display_short());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod gemini;
pub mod parse;
pub mod prompt;
pub mod service;
pub mod session;
pub mod types;

pub use error::StylistError;
pub use gemini::GeminiStylist;
pub use parse::{fallback_reasoning, parse_recommendation, recommend_or_fallback, resolve_products};
pub use service::StylingService;
pub use session::{SessionState, StylistSession};
pub use types::{
    ChatRole, ChatTurn, Complements, ImagePayload, RequestKind, StylingRecommendation,
    StylistMessage,
};
