//! Prompt construction.
//!
//! Every request embeds the catalog in the system instruction so the model can
//! only name real product ids.

use luxe_commerce::catalog::Product;
use serde_json::{json, Value};

use crate::types::RequestKind;

/// Fixed user text sent alongside an uploaded image.
pub const VISUAL_SEARCH_TEXT: &str = "Find products in our catalog that match this image's style.";

/// Fixed user text for the "complete the look" lookup.
pub const COMPLEMENTS_TEXT: &str = "Suggest complementary items to create a full outfit.";

/// Catalog line for advice requests.
pub fn advice_catalog_line(p: &Product) -> String {
    format!(
        "ID: {}, Name: {}, Brand: {}, Category: {}, Price: {}, Description: {}",
        p.id,
        p.name,
        p.brand,
        p.category,
        p.price.display_short(),
        p.description
    )
}

/// Catalog line for visual search requests.
pub fn visual_catalog_line(p: &Product) -> String {
    format!("ID: {}, Name: {}, Description: {}", p.id, p.name, p.description)
}

/// Catalog line for complement lookups.
pub fn complements_catalog_line(p: &Product) -> String {
    format!(
        "ID: {}, Name: {}, Brand: {}, Category: {}, Description: {}",
        p.id, p.name, p.brand, p.category, p.description
    )
}

fn catalog_block<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    line: fn(&Product) -> String,
) -> String {
    products.into_iter().map(line).collect::<Vec<_>>().join("\n")
}

pub fn advice_instruction(catalog: &[Product]) -> String {
    format!(
        "You are a high-end luxury fashion stylist for \"Lumina Luxe\".\n\
         Your goal is to help customers find the perfect outfit from our catalog.\n\
         Be sophisticated, helpful, and knowledgeable about current trends.\n\
         \n\
         Current Catalog:\n\
         {}\n\
         \n\
         Always respond in JSON format matching the schema provided.\n\
         If no products match, provide helpful fashion advice and suggest similar categories.",
        catalog_block(catalog, advice_catalog_line)
    )
}

pub fn visual_instruction(catalog: &[Product]) -> String {
    format!(
        "You are a visual fashion recognition expert.\n\
         Analyze the uploaded image and identify the style, color, and type of clothing.\n\
         Then, find the closest matching products from the following catalog.\n\
         \n\
         Catalog:\n\
         {}\n\
         \n\
         Return a JSON object with 'reasoning' (explaining what you see in the image and why these products match)\n\
         and 'recommendedProductIds'.",
        catalog_block(catalog, visual_catalog_line)
    )
}

/// Instruction for complements. The viewed product is left out of the
/// embedded catalog.
pub fn complements_instruction(product: &Product, catalog: &[Product]) -> String {
    let others = catalog.iter().filter(|p| p.id != product.id);
    format!(
        "You are a luxury fashion curator for \"Lumina Luxe\".\n\
         The customer is currently viewing the following item:\n\
         Name: {}, Brand: {}, Category: {}, Description: {}.\n\
         \n\
         Task: Find 2-3 items from our catalog that would \"complete the look\" or pair exceptionally well with this item.\n\
         Consider color theory, style harmony (e.g., formal with formal), and occasion suitability.\n\
         \n\
         Catalog:\n\
         {}\n\
         \n\
         Always respond in JSON format.",
        product.name,
        product.brand,
        product.category,
        product.description,
        catalog_block(others, complements_catalog_line)
    )
}

/// Structured-output schema requested for `kind`.
///
/// All kinds require `reasoning` and `recommendedProductIds`; only the field
/// descriptions differ.
pub fn response_schema(kind: RequestKind) -> Value {
    let (reasoning, ids) = match kind {
        RequestKind::Advice => (
            Some("A friendly and expert explanation of why these products were chosen."),
            Some("List of product IDs that match the user's needs."),
        ),
        RequestKind::VisualSearch => (None, None),
        RequestKind::Complements => (
            Some("A short, elegant stylist's note on why these pieces were paired together."),
            Some("Product IDs for the complementary items."),
        ),
    };

    let mut reasoning_field = json!({ "type": "STRING" });
    if let Some(desc) = reasoning {
        reasoning_field["description"] = json!(desc);
    }
    let mut ids_field = json!({ "type": "ARRAY", "items": { "type": "STRING" } });
    if let Some(desc) = ids {
        ids_field["description"] = json!(desc);
    }

    json!({
        "type": "OBJECT",
        "properties": {
            "reasoning": reasoning_field,
            "recommendedProductIds": ids_field,
        },
        "required": ["reasoning", "recommendedProductIds"],
    })
}
