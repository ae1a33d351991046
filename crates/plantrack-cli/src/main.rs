//! plantrack - plan tracking for coding-agent sessions
//!
//! A small terminal host around `plantrack-core`:
//! - replays a session log to recover the current plan
//! - runs the `todowrite` tool and records it in the log
//! - shows progress with the `/plan` command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use plantrack_core::{paths, Config};

mod host;
mod themes;

use host::{Host, TerminalNotifier};
use themes::{AnsiStyler, THEME_REGISTRY};

/// plantrack - session plan tracker
#[derive(Parser)]
#[command(name = "plantrack")]
#[command(about = "Track an agent's plan across session reloads and forks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Session log (JSONL, one entry per line)
    #[arg(short, long, global = true)]
    log: Option<PathBuf>,

    /// Theme name (defaults to the configured theme)
    #[arg(short, long, global = true)]
    theme: Option<String>,

    /// Navigate to this entry id before running the command
    #[arg(long, global = true)]
    leaf: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current plan (same as /plan)
    Status,

    /// Replace the plan, as the agent's todowrite tool call would
    Write {
        /// Steps as JSON: [{"step": "...", "status": "pending|in_progress|completed"}]
        #[arg(long)]
        steps: String,

        /// Why the plan changed
        #[arg(long)]
        explanation: Option<String>,
    },

    /// Render the detailed plan view
    Show {
        /// Show every step instead of the first few
        #[arg(long)]
        expanded: bool,
    },

    /// Print tool definitions as JSON
    Tools,

    /// List available themes
    Themes,
}

/// Log to a file so output on the terminal stays clean
fn init_logging(level: &str) {
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let Ok(log_file) =
        std::fs::File::create(paths::log_file()).or_else(|_| std::fs::File::create(null_device))
    else {
        return;
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: {}; using defaults", e);
            Config::default()
        }
    };
    init_logging(&config.log_level);

    let theme_name = cli.theme.as_deref().unwrap_or(&config.theme);
    if !THEME_REGISTRY.contains(theme_name) {
        tracing::warn!(theme = theme_name, "Unknown theme, using default");
    }
    let theme = THEME_REGISTRY.get_or_default(theme_name);
    let styler = AnsiStyler::new(theme);
    tracing::info!("Using theme: {} ({})", theme.display_name, theme.name);

    if let Commands::Themes = cli.command {
        println!("Available themes ({}):", THEME_REGISTRY.count());
        for (name, theme) in THEME_REGISTRY.list() {
            println!("  {} - {}", name, theme.display_name);
        }
        return Ok(());
    }

    let mut host = Host::open(cli.log.clone())?;
    if let Some(leaf) = cli.leaf.as_deref() {
        host.navigate(leaf)?;
    }

    match cli.command {
        Commands::Status => host.status(&mut TerminalNotifier),
        Commands::Write { steps, explanation } => {
            let steps: serde_json::Value = serde_json::from_str(&steps)
                .context("--steps must be a JSON array of {step, status} objects")?;
            let outcome = host.write(steps, explanation, &styler, config.expanded)?;
            println!("{}", outcome.call);
            if outcome.is_error {
                eprintln!("{}", outcome.summary);
            } else {
                println!("{}", outcome.result);
            }
            if cli.log.is_none() {
                tracing::info!("No --log given; plan was not recorded");
            }
        }
        Commands::Show { expanded } => {
            println!("{}", host.show(&styler, expanded || config.expanded));
        }
        Commands::Tools => {
            let defs = host.tool_definitions();
            println!("{}", serde_json::to_string_pretty(&defs)?);
        }
        Commands::Themes => {}
    }

    Ok(())
}
