//! CLI Adapter.

mod generate;
pub mod logging;
mod templates;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{self, RuntimeOptions};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "promptlab")]
#[command(version)]
#[command(
    about = "Try prompt templates against chat-completion models",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to ./promptlab.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Env file to load before reading the API key (defaults to .env)
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive session (default)
    #[clap(visible_alias = "i")]
    Interactive,
    /// Render a template for one subject and call the model once
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// Inspect stock prompt templates
    #[clap(visible_alias = "t")]
    Templates {
        #[command(subcommand)]
        command: templates::TemplatesCommands,
    },
    /// List selectable models
    #[clap(visible_alias = "m")]
    Models,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let runtime = RuntimeOptions { config_path: cli.config, env_file: cli.env_file };

    let result: Result<(), AppError> = match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => api::interactive(&runtime),
        Commands::Generate(args) => generate::run_generate(&runtime, args),
        Commands::Templates { command } => templates::run_templates(&runtime, command),
        Commands::Models => templates::run_models(&runtime),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
