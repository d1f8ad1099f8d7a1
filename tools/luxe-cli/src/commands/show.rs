//! Product detail view.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use luxe_commerce::ids::ProductId;
use luxe_commerce::storefront::Intent;
use luxe_stylist::StylistSession;
use serde_json::json;

use super::ShowArgs;
use crate::context::Context;
use crate::output::stars;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;
    let state = shop.dispatch(Intent::SelectProduct(ProductId::new(&args.id)))?;
    let product = state
        .selected_product()
        .cloned()
        .with_context(|| format!("Product {} is not in the catalog", args.id))?;
    let wishlisted = state.is_wishlisted(&product.id);
    let catalog = state.catalog.clone();

    let complements = if args.pair {
        let stylist = Arc::new(ctx.stylist()?);
        let session = StylistSession::open(stylist, Some(&product));
        let spinner = ctx.output.spinner("Curating pairings...");
        let complements = session.load_complements(&product, &catalog).await;
        spinner.finish_and_clear();
        Some(complements)
    } else {
        None
    };

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product": product,
            "wishlisted": wishlisted,
            "complements": complements,
        }));
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("brand", &product.brand);
    ctx.output.kv("category", product.category.as_str());
    ctx.output.kv("price", &product.price.display_short());
    ctx.output.kv(
        "rating",
        &format!("{:.1} ({} reviews)", product.rating, product.review_count()),
    );
    ctx.output.kv("sizes", &product.sizes.join(", "));
    ctx.output.kv("colors", &product.colors.join(", "));
    if wishlisted {
        ctx.output.kv("wishlist", "saved");
    }
    ctx.output.text("");
    ctx.output.text(&product.description);

    ctx.output.header("Reviews");
    if product.reviews.is_empty() {
        ctx.output.info("No reviews yet. Be the first to share your thoughts.");
    }
    for review in &product.reviews {
        ctx.output.list_item(&format!(
            "{} {} ({}): {}",
            stars(review.rating),
            review.user,
            review.date,
            review.comment
        ));
    }

    if let Some(complements) = complements {
        ctx.output.header("Complete the Look");
        ctx.output.text(&complements.reasoning);
        for item in &complements.products {
            ctx.output.product_row(item);
        }
    }

    Ok(())
}
