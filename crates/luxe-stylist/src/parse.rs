//! Coercing model output into recommendations.

use luxe_commerce::catalog::Product;
use tracing::{debug, warn};

use crate::error::StylistError;
use crate::types::{RequestKind, StylingRecommendation};

/// Shopper-facing text used when a request of `kind` cannot be answered.
pub fn fallback_reasoning(kind: RequestKind) -> &'static str {
    match kind {
        RequestKind::Advice => {
            "I'm having trouble accessing my styling books right now, but I'd love to help you browse our collections."
        }
        RequestKind::VisualSearch => "Visual search failed. Please try again with a clearer image.",
        RequestKind::Complements => "Explore our curated pairings below.",
    }
}

/// Parse the model's JSON text.
///
/// Markdown code fences around the JSON are tolerated. Both fields are
/// required and must have the right types.
pub fn parse_recommendation(text: &str) -> Result<StylingRecommendation, StylistError> {
    let body = strip_code_fence(text.trim());
    if body.is_empty() {
        return Err(StylistError::EmptyResponse);
    }
    serde_json::from_str(body).map_err(|e| StylistError::MalformedRecommendation(e.to_string()))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (e.g. "json"), which ends at the first newline or,
    // on a single-line fence, where the JSON starts.
    let rest = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

/// Replace any failure with the per-kind fallback, logging the cause.
pub fn recommend_or_fallback(
    kind: RequestKind,
    result: Result<StylingRecommendation, StylistError>,
) -> StylingRecommendation {
    match result {
        Ok(rec) => rec,
        Err(e) => {
            warn!(kind = kind.as_str(), error = %e, "Stylist request failed, using fallback");
            StylingRecommendation::reasoning_only(fallback_reasoning(kind))
        }
    }
}

/// Catalog products named by the recommendation, in catalog order.
///
/// Ids that match nothing are dropped.
pub fn resolve_products(rec: &StylingRecommendation, catalog: &[Product]) -> Vec<Product> {
    let products: Vec<Product> = catalog
        .iter()
        .filter(|p| rec.recommended_product_ids.iter().any(|id| id == p.id.as_str()))
        .cloned()
        .collect();

    if products.len() < rec.recommended_product_ids.len() {
        debug!(
            requested = rec.recommended_product_ids.len(),
            resolved = products.len(),
            "Dropped unknown recommended ids"
        );
    }
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxe_commerce::seed;

    #[test]
    fn test_parse_plain_json() {
        let rec =
            parse_recommendation(r#"{"reasoning":"Silk suits you","recommendedProductIds":["1","8"]}"#)
                .unwrap();
        assert_eq!(rec.reasoning, "Silk suits you");
        assert_eq!(rec.recommended_product_ids, vec!["1", "8"]);
    }

    #[test]
    fn test_parse_fenced_json() {
        let text = "```json\n{\"reasoning\":\"Warm layers\",\"recommendedProductIds\":[\"5\"]}\n```";
        let rec = parse_recommendation(text).unwrap();
        assert_eq!(rec.recommended_product_ids, vec!["5"]);
    }

    #[test]
    fn test_parse_single_line_fence() {
        let text = "```json{\"reasoning\":\"Tonal\",\"recommendedProductIds\":[\"2\",\"6\"]}```";
        let rec = parse_recommendation(text).unwrap();
        assert_eq!(rec.reasoning, "Tonal");
        assert_eq!(rec.recommended_product_ids, vec!["2", "6"]);

        let bare = "```{\"reasoning\":\"Tonal\",\"recommendedProductIds\":[]}```";
        assert_eq!(parse_recommendation(bare).unwrap().reasoning, "Tonal");
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let err = parse_recommendation(r#"{"reasoning":"only text"}"#).unwrap_err();
        assert!(matches!(err, StylistError::MalformedRecommendation(_)));
    }

    #[test]
    fn test_parse_rejects_wrong_type() {
        let err = parse_recommendation(r#"{"reasoning":"x","recommendedProductIds":"1"}"#).unwrap_err();
        assert!(matches!(err, StylistError::MalformedRecommendation(_)));
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(parse_recommendation("  "), Err(StylistError::EmptyResponse)));
    }

    #[test]
    fn test_fallback_per_kind() {
        let rec = recommend_or_fallback(RequestKind::VisualSearch, Err(StylistError::EmptyResponse));
        assert_eq!(rec.reasoning, "Visual search failed. Please try again with a clearer image.");
        assert!(rec.recommended_product_ids.is_empty());

        let ok = StylingRecommendation::reasoning_only("fine");
        assert_eq!(recommend_or_fallback(RequestKind::Advice, Ok(ok.clone())), ok);
    }

    #[test]
    fn test_resolve_drops_unknown_and_keeps_catalog_order() {
        let catalog = seed::catalog();
        let rec = StylingRecommendation::new(
            "Evening look",
            vec!["7".to_string(), "ghost".to_string(), "1".to_string()],
        );
        let ids: Vec<String> = resolve_products(&rec, &catalog)
            .iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(ids, vec!["1", "7"]);
    }
}
