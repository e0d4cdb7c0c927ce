//! CLI command implementations.

pub mod browse;
pub mod catalog;
pub mod combos;
pub mod config;
pub mod guides;
pub mod quote;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Text to search in names, descriptions, categories and codes.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Category to show ("all" for every category).
    #[arg(short = 'k', long, default_value = "all")]
    pub category: String,

    /// Sort order: nombre, precio_asc or precio_desc.
    #[arg(short, long, default_value = "nombre")]
    pub sort: String,
}

/// Arguments for the find command.
#[derive(Args)]
pub struct FindArgs {
    /// Variant code (case-insensitive).
    pub code: String,

    /// Exact presentation, e.g. "1 L".
    #[arg(long)]
    pub size: Option<String>,
}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Variant to add, as CODE[@SIZE][ xQTY] (quote it when it has spaces). Repeatable.
    #[arg(short, long = "add", value_name = "CODE[@SIZE][ xQTY]")]
    pub add: Vec<String>,

    /// Combo id to add. Repeatable.
    #[arg(long = "combo", value_name = "ID")]
    pub combos: Vec<String>,

    /// Contact to send the quote to (1 = first).
    #[arg(long, value_name = "N")]
    pub contact: Option<usize>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a storefront.toml with the built-in defaults.
    Init {
        /// Catalog path to write into the template.
        #[arg(long, default_value = crate::context::DEFAULT_CATALOG)]
        catalog_path: String,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
