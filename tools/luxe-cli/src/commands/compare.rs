//! Side-by-side comparison.

use anyhow::Result;
use luxe_commerce::compare::{ToggleOutcome, MAX_COMPARISON, MIN_TO_COMPARE};
use luxe_commerce::ids::ProductId;
use luxe_commerce::seed;
use luxe_commerce::storefront::{Intent, StorefrontState};

use super::CompareArgs;
use crate::context::Context;

const LABEL_WIDTH: usize = 10;
const COLUMN_WIDTH: usize = 24;

/// Run the compare command.
pub async fn run(args: CompareArgs, ctx: &Context) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let mut state = StorefrontState::new(seed::catalog());

    for id in args.ids {
        let id = ProductId::new(id);
        // Preview the outcome so capacity can be reported; the reducer ignores it.
        let outcome = state.comparison.clone().toggle(&id);
        state = state.reduce(Intent::ToggleComparison(id.clone()), today)?;
        if outcome == ToggleOutcome::AtCapacity {
            ctx.output.warn(&format!(
                "You can compare up to {} items; skipped {}",
                MAX_COMPARISON, id
            ));
        }
    }

    let products = state.comparison_products();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    if !state.comparison.can_compare() {
        ctx.output.info(&format!(
            "Select at least {} items to compare ({} selected).",
            MIN_TO_COMPARE,
            products.len()
        ));
        return Ok(());
    }

    ctx.output.header("Compare");
    let widths = std::iter::once(LABEL_WIDTH)
        .chain(std::iter::repeat(COLUMN_WIDTH).take(products.len()))
        .collect::<Vec<_>>();

    let row = |label: &str, values: Vec<String>| {
        let mut cols: Vec<&str> = vec![label];
        cols.extend(values.iter().map(String::as_str));
        ctx.output.table_row(&cols, &widths);
    };

    row("", products.iter().map(|p| p.name.clone()).collect());
    row("Brand", products.iter().map(|p| p.brand.clone()).collect());
    row(
        "Price",
        products.iter().map(|p| p.price.display_short()).collect(),
    );
    row(
        "Rating",
        products.iter().map(|p| format!("{:.1}", p.rating)).collect(),
    );
    row(
        "Category",
        products
            .iter()
            .map(|p| p.category.as_str().to_string())
            .collect(),
    );
    row("Colors", products.iter().map(|p| p.colors.join(", ")).collect());
    row("Sizes", products.iter().map(|p| p.sizes.join(", ")).collect());

    Ok(())
}
