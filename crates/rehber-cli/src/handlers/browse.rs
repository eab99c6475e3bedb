use crate::context::ExecutionContext;
use crate::tui::{TabContainer, TuiRenderer};
use anyhow::{Context, Result};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let data_dir = &ctx.config().data_dir;

    // Build every view before raw mode so data errors print normally
    let container = TabContainer::new(ctx.repository())
        .with_context(|| format!("failed to load directory from {}", data_dir.display()))?;
    log::info!("starting tui with {} views", container.tab_count());

    TuiRenderer::new(container).run()
}
