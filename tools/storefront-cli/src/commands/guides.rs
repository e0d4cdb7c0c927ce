//! Washing guides.

use anyhow::Result;

use crate::context::Context;
use crate::output::toned;

/// Show every guide with the number of products behind each step.
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config.guides);
        return Ok(());
    }

    let catalog = ctx.load_catalog()?;
    let palette = &ctx.config.palette;

    for guide in &ctx.config.guides {
        ctx.output.header(&guide.title);
        for step in &guide.steps {
            let count = catalog
                .products()
                .iter()
                .filter(|p| p.category == step.category)
                .count();
            ctx.output.line(&format!(
                "  {} {} {}",
                toned(" ", palette.tone(&step.category)),
                step.label,
                console::style(format!("→ {} ({})", step.category, count)).dim()
            ));
        }
        ctx.output.kv("  Id", &guide.id);
    }

    Ok(())
}
