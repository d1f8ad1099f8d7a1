//! Shopping bag.
//!
//! The bag is not persisted; each invocation starts empty and applies its
//! adds, decrements and removals in that order.

use anyhow::{bail, Result};
use luxe_commerce::ids::ProductId;
use luxe_commerce::seed;
use luxe_commerce::storefront::{Intent, StorefrontState};
use serde_json::json;

use super::CartArgs;
use crate::context::Context;

/// A parsed `id[:size[:color]]` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSpec {
    pub product_id: ProductId,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl LineSpec {
    /// Parse `id`, `id:size` or `id:size:color`.
    pub fn parse(value: &str) -> Result<Self> {
        let mut parts = value.splitn(3, ':').map(str::trim);
        let id = parts.next().unwrap_or_default();
        if id.is_empty() {
            bail!("Missing product id in '{}'", value);
        }
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Ok(Self {
            product_id: ProductId::new(id),
            size: parts.next().and_then(non_empty),
            color: parts.next().and_then(non_empty),
        })
    }

    /// Both variant axes, required to address an existing line.
    fn variant(&self, raw: &str) -> Result<(String, String)> {
        match (&self.size, &self.color) {
            (Some(size), Some(color)) => Ok((size.clone(), color.clone())),
            _ => bail!("'{}' must name a line as id:size:color", raw),
        }
    }
}

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let mut state = StorefrontState::new(seed::catalog());

    for raw in &args.add {
        let line = LineSpec::parse(raw)?;
        state = state.reduce(
            Intent::AddToCart {
                product_id: line.product_id,
                size: line.size,
                color: line.color,
            },
            today,
        )?;
    }

    for raw in &args.dec {
        let line = LineSpec::parse(raw)?;
        let (size, color) = line.variant(raw)?;
        state = state.reduce(
            Intent::UpdateQuantity {
                product_id: line.product_id,
                size,
                color,
                delta: -1,
            },
            today,
        )?;
    }

    for raw in &args.remove {
        let line = LineSpec::parse(raw)?;
        let (size, color) = line.variant(raw)?;
        state = state.reduce(
            Intent::RemoveFromCart {
                product_id: line.product_id,
                size,
                color,
            },
            today,
        )?;
    }

    let total = state.cart_total()?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "items": state.cart.items,
            "count": state.cart_count(),
            "total": total,
        }));
        return Ok(());
    }

    ctx.output.header("Shopping Bag");
    if state.cart.is_empty() {
        ctx.output.info("Your bag is empty.");
        return Ok(());
    }

    for item in &state.cart.items {
        let line_total = item.line_total()?;
        ctx.output.table_row(
            &[
                item.product.id.as_str(),
                &item.product.name,
                &item.selected_size,
                &item.selected_color,
                &format!("x{}", item.quantity),
                &line_total.display(),
            ],
            &[4, 28, 8, 10, 4, 12],
        );
    }
    ctx.output.text("");
    ctx.output.kv("items", &state.cart_count().to_string());
    ctx.output.kv("subtotal", &total.display());

    Ok(())
}
