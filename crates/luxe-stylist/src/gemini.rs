//! Google Gemini adapter.
//!
//! Talks to the `generateContent` REST endpoint with structured JSON output.
//! One attempt per request: no retries and no client-side timeout.

use std::env;
use std::fmt::{self, Debug, Formatter};

use async_trait::async_trait;
use luxe_commerce::catalog::Product;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::error::StylistError;
use crate::parse::parse_recommendation;
use crate::prompt::{
    advice_instruction, complements_instruction, response_schema, visual_instruction,
    COMPLEMENTS_TEXT, VISUAL_SEARCH_TEXT,
};
use crate::service::StylingService;
use crate::types::{ChatRole, ChatTurn, ImagePayload, RequestKind, StylingRecommendation};

/// Model used unless overridden.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Checked when [`API_KEY_ENV`] is unset.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

const API_KEY_HEADER: &str = "x-goog-api-key";

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<ChatRole>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(|r| r.as_str().to_string()),
            parts: vec![Part::Text { text: text.into() }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateResponse {
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| {
                c.parts.iter().find_map(|p| match p {
                    Part::Text { text } => Some(text.as_str()),
                    Part::InlineData { .. } => None,
                })
            })
    }
}

// ============================================================================
// Client
// ============================================================================

/// [`StylingService`] backed by the Gemini API.
pub struct GeminiStylist {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiStylist {
    /// Create a stylist pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`StylistError::Transport`] if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, StylistError> {
        let client = Client::builder()
            .user_agent(concat!("luxe-stylist/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Read the key from `GEMINI_API_KEY`, falling back to `API_KEY`.
    pub fn from_env() -> Result<Self, StylistError> {
        Self::from_env_var(API_KEY_ENV)
    }

    /// Read the key from `var`, falling back to `API_KEY`.
    pub fn from_env_var(var: &str) -> Result<Self, StylistError> {
        let key = [var, FALLBACK_API_KEY_ENV]
            .iter()
            .find_map(|name| env::var(name).ok().filter(|v| !v.trim().is_empty()))
            .ok_or_else(|| StylistError::MissingApiKey(var.to_string()))?;
        Self::new(key)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point at another API root (a mock server in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_request(
        kind: RequestKind,
        system_instruction: String,
        contents: Vec<Content>,
    ) -> GenerateRequest {
        GenerateRequest {
            contents,
            system_instruction: Content::text(None, system_instruction),
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(kind),
            },
        }
    }

    #[instrument(skip(self, kind, request), fields(model = %self.model, kind = kind.as_str()))]
    async fn generate(
        &self,
        kind: RequestKind,
        request: &GenerateRequest,
    ) -> Result<StylingRecommendation, StylistError> {
        debug!(turns = request.contents.len(), "Sending request to Gemini API");

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(StylistError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse Gemini response");
            StylistError::MalformedRecommendation(format!("response envelope: {e}"))
        })?;

        let text = parsed.text().ok_or(StylistError::EmptyResponse)?;
        let rec = parse_recommendation(text)?;

        debug!(
            recommended = rec.recommended_product_ids.len(),
            "Received Gemini recommendation"
        );
        Ok(rec)
    }
}

#[async_trait]
impl StylingService for GeminiStylist {
    async fn advise(
        &self,
        query: &str,
        catalog: &[Product],
        history: &[ChatTurn],
    ) -> Result<StylingRecommendation, StylistError> {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content::text(Some(turn.role), turn.text.clone()))
            .collect();
        contents.push(Content::text(Some(ChatRole::User), query));

        let request =
            Self::build_request(RequestKind::Advice, advice_instruction(catalog), contents);
        self.generate(RequestKind::Advice, &request).await
    }

    async fn visual_search(
        &self,
        image: &ImagePayload,
        catalog: &[Product],
    ) -> Result<StylingRecommendation, StylistError> {
        let contents = vec![Content {
            role: Some(ChatRole::User.as_str().to_string()),
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: image.mime_type.clone(),
                        data: image.data.clone(),
                    },
                },
                Part::Text {
                    text: VISUAL_SEARCH_TEXT.to_string(),
                },
            ],
        }];

        let request =
            Self::build_request(RequestKind::VisualSearch, visual_instruction(catalog), contents);
        self.generate(RequestKind::VisualSearch, &request).await
    }

    async fn suggest_complements(
        &self,
        product: &Product,
        catalog: &[Product],
    ) -> Result<StylingRecommendation, StylistError> {
        let contents = vec![Content::text(Some(ChatRole::User), COMPLEMENTS_TEXT)];
        let request = Self::build_request(
            RequestKind::Complements,
            complements_instruction(product, catalog),
            contents,
        );
        self.generate(RequestKind::Complements, &request).await
    }
}

impl Debug for GeminiStylist {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiStylist")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
