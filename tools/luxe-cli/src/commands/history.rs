//! Order history and promotions.

use anyhow::Result;
use luxe_commerce::seed;

use crate::context::Context;
use crate::output::status_badge;

/// List past orders, newest first.
pub async fn orders(ctx: &Context) -> Result<()> {
    let orders = seed::orders();

    if ctx.output.is_json() {
        ctx.output.json(&orders);
        return Ok(());
    }

    ctx.output.header("Order History");
    if orders.is_empty() {
        ctx.output.info("You have not placed any orders yet.");
        return Ok(());
    }

    for order in &orders {
        ctx.output.text("");
        ctx.output.table_row(
            &[
                order.id.as_str(),
                &order.date.format("%b %-d, %Y").to_string(),
                &status_badge(order.status),
                &order.total.display(),
            ],
            &[10, 14, 12, 12],
        );
        ctx.output.kv("items", &order.item_count().to_string());
        if !order.status.is_terminal() {
            ctx.output.kv("tracking", &order.tracking_number);
        }
        for item in &order.items {
            ctx.output.list_item(&format!(
                "{} x{}  {}",
                item.name,
                item.quantity,
                item.price.display()
            ));
        }
    }

    Ok(())
}

/// List the current promotions.
pub async fn promos(ctx: &Context) -> Result<()> {
    let promotions = seed::promotions();

    if ctx.output.is_json() {
        ctx.output.json(&promotions);
        return Ok(());
    }

    ctx.output.header("Featured");
    for promo in &promotions {
        ctx.output.text("");
        ctx.output.text(&format!("{}  {}", promo.subtitle, promo.title));
        ctx.output.text(&promo.description);
        ctx.output.kv(&promo.cta_text, &promo.image);
    }

    Ok(())
}
