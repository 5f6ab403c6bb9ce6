//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;

use chatshop_commerce::ProductId;
use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: Option<CatalogCommand>,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products, optionally filtered.
    List {
        /// Only products in this category.
        #[arg(short, long)]
        category: Option<String>,

        /// Minimum price, e.g. 99.90.
        #[arg(long)]
        min: Option<String>,

        /// Maximum price.
        #[arg(long)]
        max: Option<String>,

        /// Only featured products.
        #[arg(short, long)]
        featured: bool,

        /// Text to look for in names and descriptions.
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one product.
    Show {
        /// Product id.
        id: ProductId,
    },
    /// List categories.
    Categories,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show cart contents and totals.
    Show,
    /// Add a product.
    Add {
        /// Product id.
        id: ProductId,

        /// Quantity to add.
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Set a line's quantity. Zero or less removes it.
    Set {
        /// Product id.
        id: ProductId,

        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a product.
    Remove {
        /// Product id.
        id: ProductId,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Send to this contact instead of the configured one.
    #[arg(long)]
    pub to: Option<String>,

    /// Open the link in the default handler.
    #[arg(long)]
    pub open: bool,

    /// Keep the cart after checking out.
    #[arg(long)]
    pub keep: bool,

    /// Buy just this product now; the cart is left as is.
    #[arg(short, long)]
    pub product: Option<ProductId>,

    /// Quantity to buy with --product.
    #[arg(
        short,
        long,
        default_value = "1",
        requires = "product",
        allow_negative_numbers = true
    )]
    pub quantity: i64,
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
    /// Set a config value.
    Set {
        /// Config key (dot-separated), e.g. checkout.destination.
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
    /// Validate the config file.
    Validate,
}
