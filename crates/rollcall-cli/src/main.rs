mod commands;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

use commands::register::FormArgs;

#[derive(Parser)]
#[command(name = "rollcall")]
#[command(version, about = "rollcall - New Student Registration Form", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = rollcall::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Record file (overrides the configuration file)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit one registration from command-line fields
    Register(FormArgs),

    /// Fill in the registration form interactively
    Form,

    /// Show stored registrations
    List,
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = commands::load_config(&cli.config, cli.store)?;

    // Execute command
    let code = match cli.command {
        Commands::Register(args) => commands::register::execute(&config, args, cli.json)?,
        Commands::Form => commands::form::execute(&config, cli.json)?,
        Commands::List => commands::list::execute(&config, cli.json)?,
    };

    Ok(code)
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
