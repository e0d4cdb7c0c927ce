//! Storefront CLI - browse the catalog and build WhatsApp quotes from a terminal.
//!
//! Commands:
//! - `storefront browse` - Grouped catalog listing with search, category and sort
//! - `storefront categories` - Categories with their short label and tone
//! - `storefront combos` - Recommended combos priced against the catalog
//! - `storefront guides` - Washing guides and their steps
//! - `storefront find` - Look up a variant by code
//! - `storefront quote` - Build a cart in one shot and print the quote link
//! - `storefront shop` - Interactive shopping session
//! - `storefront config` - Show or initialize configuration

mod commands;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BrowseArgs, ConfigArgs, FindArgs, QuoteArgs};

/// Storefront CLI - Browse the catalog and send quotes over WhatsApp
#[derive(Parser)]
#[command(name = "storefront")]
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

    /// Catalog JSON path (overrides the config)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products grouped by category
    Browse(BrowseArgs),

    /// List categories
    Categories,

    /// Show recommended combos
    Combos,

    /// Show washing guides
    Guides,

    /// Look up a variant by code
    Find(FindArgs),

    /// Build a cart and print the quote
    Quote(QuoteArgs),

    /// Start an interactive shopping session
    Shop,

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(
        cli.config.as_deref(),
        cli.catalog.as_deref(),
        output.clone(),
    ) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Categories => commands::catalog::categories(&ctx),
        Commands::Combos => commands::combos::run(&ctx),
        Commands::Guides => commands::guides::run(&ctx),
        Commands::Find(args) => commands::catalog::find(args, &ctx),
        Commands::Quote(args) => commands::quote::run(args, &ctx),
        Commands::Shop => commands::shop::run(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
