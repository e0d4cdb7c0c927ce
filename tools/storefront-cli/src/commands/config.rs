//! Configuration management commands.

use anyhow::{bail, Context as _, Result};
use storefront::config::generate_default_config;

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init {
            catalog_path,
            force,
        } => init_config(&catalog_path, force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(built-in defaults)"),
    }
    ctx.output.kv("catalog", &ctx.catalog_path().display().to_string());

    // Contacts
    ctx.output.info("");
    ctx.output.info("[[contacts]]");
    for (i, contact) in ctx.config.contacts.iter().enumerate() {
        ctx.output.kv(&format!("{}", i + 1), &contact.href);
    }

    // Combos
    ctx.output.info("");
    ctx.output.info("[[combos]]");
    for combo in &ctx.config.combos {
        let items = combo.items.len();
        ctx.output.list_item(&format!("{} ({} items) {}", combo.id, items, combo.name));
    }

    // Guides
    ctx.output.info("");
    ctx.output.info("[[guides]]");
    for guide in &ctx.config.guides {
        let steps = guide.steps.len();
        ctx.output.list_item(&format!("{} ({} steps) {}", guide.id, steps, guide.title));
    }

    // Palette
    ctx.output.info("");
    ctx.output.info("[palette]");
    ctx.output.kv("fallback_tone", &ctx.config.palette.fallback_tone);
    ctx.output.kv("tones", &ctx.config.palette.tones.len().to_string());
    ctx.output.kv("labels", &ctx.config.palette.labels.len().to_string());

    if ctx.output.is_verbose() {
        ctx.output.info("");
        ctx.output.line(&ctx.config.to_toml()?);
    }

    Ok(())
}

fn init_config(catalog_path: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.resolve_path("storefront.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let content = generate_default_config(catalog_path)?;
    std::fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
