use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rehber")]
#[command(about = "Terminal company directory", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Config file (default search: ./config.toml, <config dir>/rehber/config.toml, /etc/rehber/config.toml)"
    )]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Directory holding people.json and departments.json")]
    pub data_dir: Option<PathBuf>,

    #[arg(long, global = true, help = "Log file written while the TUI owns the terminal")]
    pub log_file: Option<PathBuf>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse people and departments (default)
    Browse,

    /// Say hello to someone
    Hello {
        #[arg(short, long, help = "Name to greet")]
        name: Option<String>,
    },

    /// Load and join both datasets without starting the TUI
    Check,
}
