//! Artist Program CLI
//!
//! Deploy an art collection and configure its first artwork from the terminal.

mod commands;
mod style;
mod wizard;

use anyhow::{Context, Result};
use artist_program::{Address, ProgramConfig};
use clap::{Args, Parser, Subcommand};
use console::style;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "artist")]
#[command(about = "Create an art collection and its first artwork", version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Config file (defaults to ~/.config/artist-program/config.toml)
    #[arg(short, long, global = true, env = "ARTIST_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Wizard options when no subcommand is given
    #[command(flatten)]
    create: CreateArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
struct CreateArgs {
    /// Connected wallet address; without it the artwork step is blocked
    #[arg(short, long, env = "ARTIST_WALLET")]
    wallet: Option<Address>,

    /// Collection factory address (overrides config)
    #[arg(long, env = "ARTIST_FACTORY_ADDRESS")]
    factory: Option<Address>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive creation wizard
    Create(CreateArgs),
    /// Encode or decode embedded metadata URIs
    Metadata {
        #[command(subcommand)]
        action: commands::metadata::MetadataAction,
    },
    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "artist_program=debug,artist=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = ProgramConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command.unwrap_or(Commands::Create(cli.create)) {
        Commands::Create(CreateArgs { wallet, factory }) => {
            if let Some(factory) = factory {
                config.factory_address = factory;
            }
            wizard::run_create_wizard(&config, wallet).await
        }
        Commands::Metadata { action } => commands::metadata::run(action),
        Commands::Config => commands::config::run(&config, cli.config.as_deref()),
    }
}

pub fn print_banner() {
    println!(
        "{}",
        style(
            r#"
     _         _   _     _
    / \   _ __| |_(_)___| |_
   / _ \ | '__| __| / __| __|
  / ___ \| |  | |_| \__ \ |_
 /_/   \_\_|   \__|_|___/\__|
"#
        )
        .magenta()
    );
}
