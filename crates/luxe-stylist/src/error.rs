//! Stylist error types.

use thiserror::Error;

/// Errors from the styling service and its adapters.
#[derive(Error, Debug)]
pub enum StylistError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Gemini API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response carried no candidate text.
    #[error("Gemini response contained no text")]
    EmptyResponse,

    /// The response text is not a valid recommendation.
    #[error("Malformed recommendation: {0}")]
    MalformedRecommendation(String),

    /// No API key in the environment.
    #[error("No API key found; set {0}")]
    MissingApiKey(String),

    /// An image could not be decoded into an upload payload.
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Bad client configuration, e.g. an unparsable base URL.
    #[error("Configuration error: {0}")]
    Config(String),
}
