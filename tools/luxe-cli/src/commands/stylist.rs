//! AI stylist commands.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use dialoguer::Input;
use luxe_commerce::catalog::Product;
use luxe_commerce::ids::ProductId;
use luxe_commerce::seed;
use luxe_commerce::storefront::Intent;
use luxe_stylist::{ChatRole, GeminiStylist, ImagePayload, StylistMessage, StylistSession};

use super::{StylistArgs, StylistCommand};
use crate::context::Context;

/// Words that end an interactive chat.
const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

type Session = StylistSession<GeminiStylist>;

/// Run the stylist command.
pub async fn run(args: StylistArgs, ctx: &Context) -> Result<()> {
    match args.command {
        StylistCommand::Ask { text } => ask(&text.join(" "), ctx).await,
        StylistCommand::Image { path } => image(&path, ctx).await,
        StylistCommand::Chat { product } => chat(product, ctx).await,
    }
}

async fn ask(text: &str, ctx: &Context) -> Result<()> {
    let catalog = seed::catalog();
    let session = Session::open(Arc::new(ctx.stylist()?), None);

    let spinner = ctx.output.spinner("Consulting your stylist...");
    let reply = session.send(text, &catalog).await;
    spinner.finish_and_clear();

    match reply {
        Some(message) => print_message(ctx, &message),
        None => ctx.output.warn("Ask the stylist something first."),
    }
    Ok(())
}

async fn image(path: &str, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(Path::new(path));
    let bytes = std::fs::read(&path)
        .with_context(|| format!("Failed to read image: {}", path.display()))?;
    let payload = ImagePayload::from_bytes(&bytes, ImagePayload::mime_for_path(&path));

    let catalog = seed::catalog();
    let session = Session::open(Arc::new(ctx.stylist()?), None);

    let spinner = ctx.output.spinner("Analyzing your photo...");
    let reply = session.visual_search(&payload, &catalog).await;
    spinner.finish_and_clear();

    print_message(ctx, &reply);
    Ok(())
}

async fn chat(product: Option<String>, ctx: &Context) -> Result<()> {
    let viewing = match product {
        Some(id) => Some(view_product(&id, ctx)?),
        None => None,
    };

    let catalog = seed::catalog();
    let session = Session::open(Arc::new(ctx.stylist()?), viewing.as_ref());

    for message in session.transcript() {
        print_message(ctx, &message);
    }

    if let Some(product) = &viewing {
        let spinner = ctx.output.spinner("Curating pairings...");
        let complements = session.load_complements(product, &catalog).await;
        spinner.finish_and_clear();
        if !complements.products.is_empty() {
            ctx.output.header("Complete the Look");
            ctx.output.text(&complements.reasoning);
            for item in &complements.products {
                ctx.output.product_row(item);
            }
        }
    }

    loop {
        let line: String = Input::new()
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()?;
        let line = line.trim();

        if EXIT_WORDS.iter().any(|w| line.eq_ignore_ascii_case(w)) {
            break;
        }

        let spinner = ctx.output.spinner("Thinking...");
        let reply = session.send(line, &catalog).await;
        spinner.finish_and_clear();

        if let Some(message) = reply {
            print_message(ctx, &message);
        }
    }

    ctx.output.debug(&format!(
        "Session ended with {} messages",
        session.transcript().len()
    ));
    Ok(())
}

/// Open the product so it lands in recently viewed.
fn view_product(id: &str, ctx: &Context) -> Result<Product> {
    let mut shop = ctx.storefront()?;
    let state = shop.dispatch(Intent::SelectProduct(ProductId::new(id)))?;
    state
        .selected_product()
        .cloned()
        .with_context(|| format!("Product {} is not in the catalog", id))
}

fn print_message(ctx: &Context, message: &StylistMessage) {
    if ctx.output.is_json() {
        ctx.output.json(message);
        return;
    }

    ctx.output.text("");
    ctx.output.text(&format!("{}: {}", speaker(message), message.text));
    for product in &message.products {
        ctx.output.product_row(product);
    }
}

fn speaker(message: &StylistMessage) -> &'static str {
    match message.role {
        ChatRole::User => "You",
        ChatRole::Model => "Stylist",
    }
}
