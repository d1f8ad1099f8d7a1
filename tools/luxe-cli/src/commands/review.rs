//! Review submission.

use anyhow::{Context as _, Result};
use luxe_commerce::catalog::NewReview;
use luxe_commerce::ids::ProductId;
use luxe_commerce::storefront::Intent;

use super::ReviewArgs;
use crate::context::Context;
use crate::output::stars;

/// Run the review command.
///
/// The catalog is the built-in seed, so the review lasts for this invocation.
pub async fn run(args: ReviewArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;
    let id = ProductId::new(&args.id);
    let review = NewReview::new(args.name, args.rating, args.comment);

    let state = shop.dispatch(Intent::AddReview {
        product_id: id.clone(),
        review,
    })?;
    let product = state
        .find_product(&id)
        .with_context(|| format!("Product {} is not in the catalog", id))?;
    let added = product
        .reviews
        .last()
        .context("Review was not recorded")?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "review": added,
            "rating": product.rating,
            "reviewCount": product.review_count(),
        }));
        return Ok(());
    }

    ctx.output.success(&format!(
        "Thanks {}! {} for {}",
        added.user,
        stars(added.rating),
        product.name
    ));
    ctx.output.kv(
        "new rating",
        &format!("{:.1} from {} reviews", product.rating, product.review_count()),
    );

    Ok(())
}
