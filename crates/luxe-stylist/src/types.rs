//! Stylist conversation and recommendation types.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use luxe_commerce::catalog::Product;
use serde::{Deserialize, Serialize};

use crate::error::StylistError;

/// Mime type assumed for uploads whose type cannot be told.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// What the model returns for every request kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylingRecommendation {
    pub reasoning: String,
    #[serde(rename = "recommendedProductIds")]
    pub recommended_product_ids: Vec<String>,
}

impl StylingRecommendation {
    pub fn new(reasoning: impl Into<String>, ids: Vec<String>) -> Self {
        Self {
            reasoning: reasoning.into(),
            recommended_product_ids: ids,
        }
    }

    /// A recommendation that only carries text.
    pub fn reasoning_only(reasoning: impl Into<String>) -> Self {
        Self::new(reasoning, Vec::new())
    }
}

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    /// Role name on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// A prior conversation turn sent back to the model as context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// A transcript line, optionally with the products the model picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylistMessage {
    pub role: ChatRole,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<Product>,
}

impl StylistMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            products: Vec::new(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
            products: Vec::new(),
        }
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn turn(&self) -> ChatTurn {
        ChatTurn {
            role: self.role,
            text: self.text.clone(),
        }
    }
}

/// An image ready to be sent inline: base64 data plus its mime type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    /// Standard base64, no data-URL prefix.
    pub data: String,
}

impl ImagePayload {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Encode raw image bytes.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self::new(mime_type, STANDARD.encode(bytes))
    }

    /// Split a `data:<mime>;base64,<data>` URL.
    pub fn from_data_url(url: &str) -> Result<Self, StylistError> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| StylistError::InvalidImage("not a data URL".to_string()))?;
        let (meta, data) = rest
            .split_once(',')
            .ok_or_else(|| StylistError::InvalidImage("data URL has no payload".to_string()))?;
        let mime = meta
            .strip_suffix(";base64")
            .ok_or_else(|| StylistError::InvalidImage("data URL is not base64".to_string()))?;

        STANDARD
            .decode(data)
            .map_err(|e| StylistError::InvalidImage(e.to_string()))?;

        let mime = if mime.is_empty() { DEFAULT_IMAGE_MIME } else { mime };
        Ok(Self::new(mime, data))
    }

    /// Guess the mime type from a file extension.
    pub fn mime_for_path(path: &Path) -> &'static str {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => "image/png",
            Some("webp") => "image/webp",
            Some("gif") => "image/gif",
            Some("heic") => "image/heic",
            Some("heif") => "image/heif",
            _ => DEFAULT_IMAGE_MIME,
        }
    }
}

/// The three request shapes the stylist sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Advice,
    VisualSearch,
    Complements,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Advice => "advice",
            RequestKind::VisualSearch => "visual_search",
            RequestKind::Complements => "complements",
        }
    }
}

/// "Complete the look" result for a viewed product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complements {
    pub reasoning: String,
    pub products: Vec<Product>,
}
