//! Quotegif - Quote-Driven Movie Clip Extraction
//!
//! This is the main entry point for the quotegif CLI, which locates a
//! spoken quote in a movie's subtitle track and cuts a short looping GIF
//! around the matching timestamp using ffmpeg.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quotegif::cli::{Args, RunMode};
use quotegif::config::Config;
use quotegif::error::QuoteGifError;
use quotegif::workflow::Workflow;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Decide what to run before touching the network or the filesystem
    let mode = args.run_mode();
    if mode == RunMode::Usage {
        println!("Need to pass both start and end times for gif.");
        std::process::exit(2);
    }

    // Setup logging to both console and file
    setup_logging(args.verbose)?;

    // Load configuration
    let config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            // Try to load config.toml from current directory first
            if std::path::Path::new("config.toml").exists() {
                info!("Found config.toml in current directory, loading...");
                Config::from_file("config.toml")?
            } else {
                Config::default()
            }
        }
    };

    // Create workflow instance
    let workflow = Workflow::new(config)?;

    let outcome = match mode {
        RunMode::Search { quote } => {
            info!(
                "Searching subtitles of {} for the quote",
                args.movie.display()
            );
            workflow
                .run_quote_search(&args.movie, &quote, &args.output)
                .await
        }
        RunMode::Explicit {
            start,
            end,
            overrides_quote,
        } => {
            if overrides_quote {
                println!("Providing the start and end time overrides finding the quote.");
            }
            info!(
                "Cutting {} from {} to {}",
                args.movie.display(),
                start,
                end
            );
            workflow
                .run_explicit(&args.movie, &start, &end, &args.output)
                .await
        }
        RunMode::Usage => unreachable!("usage handled above"),
    };

    if let Err(QuoteGifError::SubtitlesNotFound) = &outcome {
        // Known terminal outcome with a documented message
        println!("Subtitles not found");
        std::process::exit(1);
    }
    outcome?;

    info!("quotegif completed successfully");
    Ok(())
}

/// Setup logging to both console and file
fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let quotegif_dir = std::env::current_dir()?.join(".quotegif");
    let log_dir = quotegif_dir.join("log");
    std::fs::create_dir_all(&log_dir)?;

    // Set up file appender with daily rotation
    let file_appender = rolling::daily(&log_dir, "quotegif.log");
    let (non_blocking_file, _guard) = non_blocking(file_appender);
    // Keep the guard alive for the duration of the program
    std::mem::forget(_guard);

    // Determine log level
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    // Create console layer
    let console_layer = fmt::layer().with_target(false);

    // Create file layer
    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI colors in file

    // Setup layered subscriber
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer);

    // Initialize the subscriber
    subscriber
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
