use crate::context::ExecutionContext;
use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let config = ctx.config();

    if config.verbose {
        println!("Verbose mode is ON");
    }

    if std::io::stdout().is_terminal() {
        println!("Hello, {}!", config.name.bold());
    } else {
        println!("Hello, {}!", config.name);
    }

    Ok(())
}
