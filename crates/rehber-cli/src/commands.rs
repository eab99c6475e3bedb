use super::args::{Cli, Commands};
use super::handlers;
use crate::config::{Config, Overrides};
use crate::context::ExecutionContext;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let hello_name = match &cli.command {
        Some(Commands::Hello { name }) => name.clone(),
        _ => None,
    };
    let overrides = Overrides {
        name: hello_name,
        verbose: cli.verbose,
        data_dir: cli.data_dir,
        log_file: cli.log_file,
    };

    let resolved = Config::resolve(cli.config.as_deref(), &overrides)?;
    let command = cli.command.unwrap_or(Commands::Browse);

    if let Some(path) = &resolved.source {
        println!("Using config file: {}", path.display());
    }

    // hello never touches the data or the terminal; keep it free of side effects
    if !matches!(command, Commands::Hello { .. }) {
        logging::init(&resolved.config, cli.log_level)?;
        if let Some(path) = &resolved.source {
            log::info!("using config file {}", path.display());
        }
    }

    let ctx = ExecutionContext::new(resolved.config);

    match command {
        Commands::Browse => handlers::browse::handle(&ctx),
        Commands::Hello { .. } => handlers::hello::handle(&ctx),
        Commands::Check => handlers::check::handle(&ctx),
    }
}
