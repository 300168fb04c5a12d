//! sitegen CLI - generate websites from natural language prompts.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "sitegen")]
#[command(about = "Generate websites from natural language prompts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to sitegen.toml config file
    #[arg(short, long, default_value = "sitegen.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default sitegen.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Start the generator page with live preview
    Serve {
        /// Port to listen on (defaults to config or 7878)
        #[arg(short, long)]
        port: Option<u16>,

        /// Base URL of the generation service (defaults to config)
        #[arg(short, long)]
        backend: Option<String>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Generate a site from the terminal and write it to disk
    Generate {
        /// What the site should be
        prompt: String,

        /// Output directory
        #[arg(short, long, default_value = "site")]
        output: PathBuf,

        /// Base URL of the generation service (defaults to config)
        #[arg(short, long)]
        backend: Option<String>,
    },

    /// Serve a generated site directory
    Preview {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve
        #[arg(short, long, default_value = "site")]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Serve {
            port,
            backend,
            no_open,
        } => {
            let config = config::load_config(&cli.config)?;
            commands::serve::run(config, port, backend, !no_open).await?;
        }
        Commands::Generate {
            prompt,
            output,
            backend,
        } => {
            let config = config::load_config(&cli.config)?;
            commands::generate::run(config, &prompt, output, backend).await?;
        }
        Commands::Preview { port, dir } => {
            commands::preview::run(port, dir).await?;
        }
    }

    Ok(())
}
