//! Catalog browsing.

use anyhow::{bail, Context as _, Result};
use luxe_commerce::catalog::Category;
use luxe_commerce::money::Money;
use luxe_commerce::search::{CategoryFilter, ColorFilter, DEFAULT_MAX_PRICE};
use luxe_commerce::storefront::{Intent, StorefrontState};
use luxe_commerce::seed;

use super::BrowseArgs;
use crate::context::Context;

/// Parse a category flag; `all` lifts the restriction.
pub fn parse_category(value: &str) -> Result<CategoryFilter> {
    if value.eq_ignore_ascii_case("all") {
        return Ok(CategoryFilter::All);
    }
    Ok(CategoryFilter::Only(value.parse::<Category>()?))
}

/// Turn a whole-dollar ceiling into money, rejecting negative or oversized values.
pub fn parse_max_price(dollars: Option<i64>) -> Result<Money> {
    let Some(dollars) = dollars else {
        return Ok(DEFAULT_MAX_PRICE);
    };
    if dollars < 0 {
        bail!("Price ceiling must not be negative: {}", dollars);
    }
    Money::try_usd(dollars).with_context(|| format!("Price ceiling is too large: {}", dollars))
}

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let max_price = parse_max_price(args.max_price.or(ctx.config.browse.max_price))?;

    let today = chrono::Local::now().date_naive();
    let state = StorefrontState::new(seed::catalog())
        .reduce(Intent::SetCategory(parse_category(&args.category)?), today)?
        .reduce(
            Intent::SetColor(args.color.as_deref().map_or(ColorFilter::All, ColorFilter::from_label)),
            today,
        )?
        .reduce(Intent::SetMaxPrice(max_price), today)?;

    let products = state.filtered_products();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header("The Collection");
    if state.filter.has_active_filters() {
        ctx.output.kv("category", &args.category);
        ctx.output
            .kv("color", args.color.as_deref().unwrap_or("All"));
        ctx.output.kv("up to", &max_price.display_short());
    }

    if products.is_empty() {
        ctx.output.info("No pieces match these filters.");
        ctx.output.info("Try widening the price range or choosing another color.");
    } else {
        for product in &products {
            ctx.output.product_row(product);
        }
    }

    ctx.output.header("Colors");
    ctx.output.info(&state.available_colors().join(", "));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("ALL").unwrap(), CategoryFilter::All);
        assert_eq!(
            parse_category("women").unwrap(),
            CategoryFilter::Only(Category::Women)
        );
        assert!(parse_category("kids").is_err());
    }

    #[test]
    fn test_parse_max_price() {
        assert_eq!(parse_max_price(None).unwrap(), DEFAULT_MAX_PRICE);
        assert_eq!(parse_max_price(Some(300)).unwrap(), Money::usd(300));
        assert_eq!(parse_max_price(Some(0)).unwrap(), Money::usd(0));
    }

    #[test]
    fn test_parse_max_price_rejects_out_of_range() {
        assert!(parse_max_price(Some(-1)).is_err());
        assert!(parse_max_price(Some(100_000_000_000_000_000)).is_err());
        assert!(parse_max_price(Some(i64::MAX)).is_err());
    }
}
