//! Luxe CLI - Terminal front end for the Lumina Luxe storefront.
//!
//! Commands:
//! - `luxe browse` - Filter the catalog
//! - `luxe show` - Product details, reviews and pairings
//! - `luxe wishlist` / `luxe recent` - Saved and recently viewed products
//! - `luxe review` - Leave a review
//! - `luxe cart` - Build a cart and see the total
//! - `luxe compare` - Compare up to four products
//! - `luxe orders` / `luxe promos` - Order history and current promotions
//! - `luxe stylist` - Ask the AI stylist
//! - `luxe config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    BrowseArgs, CartArgs, CompareArgs, ConfigArgs, RecentArgs, ReviewArgs, ShowArgs, StylistArgs,
    WishlistArgs,
};

/// Luxe CLI - Browse the Lumina Luxe collection and talk to the stylist
#[derive(Parser)]
#[command(name = "luxe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog with filters
    Browse(BrowseArgs),

    /// Show a product and record it as recently viewed
    Show(ShowArgs),

    /// Manage the wishlist
    Wishlist(WishlistArgs),

    /// Recently viewed products
    Recent(RecentArgs),

    /// Review a product
    Review(ReviewArgs),

    /// Add products to a cart and price it
    Cart(CartArgs),

    /// Compare products side by side
    Compare(CompareArgs),

    /// Past orders
    Orders,

    /// Current promotions
    Promos,

    /// Talk to the AI stylist
    Stylist(StylistArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Wishlist(args) => commands::lists::wishlist(args, &ctx).await,
        Commands::Recent(args) => commands::lists::recent(args, &ctx).await,
        Commands::Review(args) => commands::review::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Compare(args) => commands::compare::run(args, &ctx).await,
        Commands::Orders => commands::history::orders(&ctx).await,
        Commands::Promos => commands::history::promos(&ctx).await,
        Commands::Stylist(args) => commands::stylist::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
