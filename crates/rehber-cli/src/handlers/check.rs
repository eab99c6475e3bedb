use crate::context::ExecutionContext;
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use rehber_engine::{build_department_rows, build_people_rows};

/// Load and join both datasets without starting the TUI
pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let data_dir = &ctx.config().data_dir;
    let repo = ctx.repository();

    let people = build_people_rows(repo)
        .with_context(|| format!("failed to load people from {}", data_dir.display()))?;
    let departments = build_department_rows(repo)
        .with_context(|| format!("failed to load departments from {}", data_dir.display()))?;
    let top_level = repo.top_level_departments()?.len();

    log::info!(
        "check passed: {} people, {} departments",
        people.len(),
        departments.len()
    );

    let status = "✓ Directory OK";
    if std::io::stdout().is_terminal() {
        println!("{}", status.green().bold());
    } else {
        println!("{}", status);
    }
    println!("Data dir:    {}", data_dir.display());
    println!("People:      {}", people.len());
    println!("Departments: {} ({} top-level)", departments.len(), top_level);

    Ok(())
}
