//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod compare;
pub mod config;
pub mod history;
pub mod lists;
pub mod review;
pub mod show;
pub mod stylist;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Category: men, women, accessories or all.
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Only products offered in this color.
    #[arg(long)]
    pub color: Option<String>,

    /// Price ceiling in whole dollars.
    #[arg(long)]
    pub max_price: Option<i64>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product ID.
    pub id: String,

    /// Ask the stylist for pieces that complete the look.
    #[arg(long)]
    pub pair: bool,
}

/// Arguments for the wishlist command.
#[derive(Args)]
pub struct WishlistArgs {
    #[command(subcommand)]
    pub command: Option<WishlistCommand>,
}

#[derive(Subcommand)]
pub enum WishlistCommand {
    /// List saved products.
    List,
    /// Add or remove a product.
    Toggle {
        /// Product ID.
        id: String,
    },
}

/// Arguments for the recent command.
#[derive(Args)]
pub struct RecentArgs {
    #[command(subcommand)]
    pub command: Option<RecentCommand>,
}

#[derive(Subcommand)]
pub enum RecentCommand {
    /// List recently viewed products, most recent first.
    List,
    /// Clear the history.
    Clear,
}

/// Arguments for the review command.
#[derive(Args)]
pub struct ReviewArgs {
    /// Product ID.
    pub id: String,

    /// Your name.
    #[arg(long)]
    pub name: String,

    /// Rating from 1 to 5.
    #[arg(long)]
    pub rating: u8,

    /// Review text.
    #[arg(long)]
    pub comment: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Add one unit: `id`, `id:size` or `id:size:color`. Repeatable.
    #[arg(short, long = "add", value_name = "LINE")]
    pub add: Vec<String>,

    /// Take one unit off a line (never below one): `id:size:color`.
    #[arg(long = "dec", value_name = "LINE")]
    pub dec: Vec<String>,

    /// Remove a line outright: `id:size:color`.
    #[arg(long = "remove", value_name = "LINE")]
    pub remove: Vec<String>,
}

/// Arguments for the compare command.
#[derive(Args)]
pub struct CompareArgs {
    /// Product IDs to toggle into the comparison, in order.
    #[arg(required = true)]
    pub ids: Vec<String>,
}

/// Arguments for the stylist command.
#[derive(Args)]
pub struct StylistArgs {
    #[command(subcommand)]
    pub command: StylistCommand,
}

#[derive(Subcommand)]
pub enum StylistCommand {
    /// Ask a single question.
    Ask {
        /// Your question.
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Find products that match a photo.
    Image {
        /// Image file.
        path: String,
    },
    /// Start an interactive conversation.
    Chat {
        /// Product you are looking at.
        #[arg(short, long)]
        product: Option<String>,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
