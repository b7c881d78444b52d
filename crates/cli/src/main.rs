use anyhow::{Context, Result};
use askara_client::HttpStudyService;
use askara_core::Config;
use askara_ui::{App, AppState};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Askara - exam practice assistant
#[derive(Parser, Debug)]
#[command(name = "askara")]
#[command(about = "A TUI client for AI-assisted exam practice", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to askara.toml (default: ./askara.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive study session
    Start {
        /// Override the service base URL for this run
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Override the paper code for this run
        #[arg(long, value_name = "CODE")]
        paper_code: Option<String>,
    },
    /// Show the resolved configuration
    Status,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(|| PathBuf::from("askara.toml"));
    let config = load_or_create_config(&config_path)?;

    askara_core::init_logging(Some(config.logging.clone().into()))
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if cli.verbose {
        println!("{} Using config: {}", "Info:".blue().bold(), config_path.display());
    }

    match cli.command {
        Commands::Start { base_url, paper_code } => cmd_start(config, base_url, paper_code, cli.verbose).await?,
        Commands::Status => cmd_status(config)?,
    }

    Ok(())
}

/// Load config from file or create from example
fn load_or_create_config(path: &Path) -> Result<Config> {
    if path.exists() {
        Config::from_file(path).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    } else {
        println!("{} Config not found at {}", "Warning:".yellow().bold(), path.display());
        println!("{} Creating config from example...", "Info:".blue().bold());

        std::fs::write(path, Config::example()).context("Failed to create config")?;

        println!(
            "{} Created config at {}. Edit it to point at your prediction service.",
            "Success:".green().bold(),
            path.display()
        );

        anyhow::bail!("Please review askara.toml and run again")
    }
}

/// Start the interactive study session
async fn cmd_start(
    mut config: Config, base_url: Option<String>, paper_code: Option<String>, verbose: bool,
) -> Result<()> {
    if let Some(url) = base_url {
        config.base_url = url;
    }
    if let Some(code) = paper_code {
        config.paper_code = code;
    }

    if verbose {
        println!("{} Service: {}", "Info:".blue().bold(), config.base_url.cyan());
        println!("{} Paper: {}", "Info:".blue().bold(), config.paper_code.cyan());
    }

    let service = Arc::new(HttpStudyService::new(config.base_url.clone()));
    let state = AppState::new(config.base_url, config.paper_code, config.display);
    let mut app = App::new(state, service);

    askara_ui::app::run(&mut app).await.context("TUI session failed")?;

    Ok(())
}

/// Show the resolved configuration
fn cmd_status(config: Config) -> Result<()> {
    println!("{}", "Askara Status".green().bold().underline());
    println!();

    println!("{} Service", "Info:".blue().bold());
    println!("  Base URL: {}", config.base_url.cyan());
    println!("  Paper code: {}", config.paper_code.cyan());
    println!();

    println!("{} Display", "Info:".blue().bold());
    println!("  Clarification cap: {}", config.display.clarification_cap.to_string().cyan());
    println!("  History window: {}", config.display.history_window.to_string().cyan());
    println!(
        "  Scroll: threshold {} rows, settle {} ms, delay {} ms",
        config.display.scroll.bottom_threshold.to_string().cyan(),
        config.display.scroll.settle_ms.to_string().cyan(),
        config.display.scroll.delay_ms.to_string().cyan()
    );
    println!();

    println!("{} Logging", "Info:".blue().bold());
    println!("  Level: {}", config.logging.level.cyan());
    println!("  Format: {}", config.logging.format.cyan());
    println!(
        "  File logging: {}",
        if config.logging.file.enabled { "enabled".green().to_string() } else { "disabled".to_string() }
    );

    Ok(())
}
