//! Vita - terminal portfolio

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use vita::App;
use vita::app::Settings;
use vita::config::Config;
use vita::content::Portfolio;

/// Terminal portfolio with typed-intro and scroll-reveal animations
#[derive(Parser)]
#[command(name = "vita")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Load portfolio content from a JSON file instead of the built-in
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Render all animations pre-completed for this run
    #[arg(long)]
    reduce_motion: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a content file and print a summary
    Check {
        /// Content file to validate (defaults to the built-in content)
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Clear the log file on startup
    let log_path = vita::paths::log_path();
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Log to the temp dir - tail with: tail -f /tmp/vita.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), "vita.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Check { path }) => cmd_check(path.as_deref()),
        None => {
            let config = Config::load().unwrap_or_else(|e| {
                eprintln!("Warning: {e:#}");
                Config::default()
            });

            let mut settings = Settings::load();
            if let Err(e) = settings.touch() {
                eprintln!("Warning: Failed to save settings: {e}");
            }
            // The CLI flag applies for this run only, so it is set after
            // the settings have been persisted.
            if cli.reduce_motion {
                settings.reduce_motion = true;
            }

            let content = match cli.content {
                Some(path) => Portfolio::load(&path)?,
                None => Portfolio::builtin(),
            };

            let app = App::new(config, settings, content, Instant::now())?;
            vita::tui::run(app)
        }
    }
}

fn cmd_check(path: Option<&Path>) -> Result<()> {
    let (portfolio, source) = match path {
        Some(path) => (Portfolio::load(path)?, path.display().to_string()),
        None => (Portfolio::builtin(), "built-in".to_string()),
    };

    println!("Content OK ({source})");
    println!("  roles:          {}", portfolio.profile.roles.len());
    println!("  technical:      {}", portfolio.skills.technical.len());
    println!("  soft skills:    {}", portfolio.skills.soft.len());
    println!("  tools:          {}", portfolio.skills.tools.len());
    println!("  certifications: {}", portfolio.certifications.len());
    println!("  experience:     {}", portfolio.experience.len());
    println!("  projects:       {}", portfolio.projects.len());
    Ok(())
}
