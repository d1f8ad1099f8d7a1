//! Wishlist and recently viewed commands.

use anyhow::Result;
use luxe_commerce::catalog::Product;
use luxe_commerce::ids::ProductId;
use luxe_commerce::storefront::Intent;

use super::{RecentArgs, RecentCommand, WishlistArgs, WishlistCommand};
use crate::context::Context;

/// Run the wishlist command.
pub async fn wishlist(args: WishlistArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;

    match args.command {
        Some(WishlistCommand::List) | None => {
            print_products(
                ctx,
                "Wishlist",
                &shop.state().wishlist_products(),
                "Your wishlist is empty.",
            );
        }
        Some(WishlistCommand::Toggle { id }) => {
            let id = ProductId::new(id);
            let state = shop.dispatch(Intent::ToggleWishlist(id.clone()))?;
            let saved = state.is_wishlisted(&id);
            if ctx.output.is_json() {
                ctx.output
                    .json(&serde_json::json!({ "id": id, "wishlisted": saved }));
            } else if saved {
                ctx.output.success(&format!("Saved {} to your wishlist", id));
            } else {
                ctx.output.success(&format!("Removed {} from your wishlist", id));
            }
        }
    }

    Ok(())
}

/// Run the recent command.
pub async fn recent(args: RecentArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront()?;

    match args.command {
        Some(RecentCommand::List) | None => {
            print_products(
                ctx,
                "Recently Viewed",
                &shop.state().recently_viewed_products(),
                "Nothing viewed yet.",
            );
        }
        Some(RecentCommand::Clear) => {
            shop.dispatch(Intent::ClearRecentlyViewed)?;
            ctx.output.success("Cleared recently viewed history");
        }
    }

    Ok(())
}

fn print_products(ctx: &Context, title: &str, products: &[&Product], empty: &str) {
    if ctx.output.is_json() {
        ctx.output.json(&products);
        return;
    }

    ctx.output.header(title);
    if products.is_empty() {
        ctx.output.info(empty);
        return;
    }
    for product in products {
        ctx.output.product_row(product);
    }
}
