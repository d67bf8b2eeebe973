//! Floater Headless Surface
//!
//! A headless shell around the floater display core: the process entry
//! point that owns the one `DisplayController`, feeds it update events
//! read as newline-delimited JSON from stdin, and prints every rendered
//! frame to stdout. Useful for driving the display logic end to end
//! without a window system - from scripts, tests, or another process's
//! pipe.
//!
//! # Usage
//!
//! ```bash
//! # Show the placeholder, then react to piped events
//! printf '%s\n' '{"content":"build passing"}' '{"timer":true}' | floater-headless
//!
//! # Serve initial content through the embedded host
//! floater-headless --initial-content "hello"
//!
//! # Verbose logging (frames stay on stdout, logs go to stderr)
//! RUST_LOG=debug floater-headless
//! ```
//!
//! Event payload shape: `{"content": "...", "timer": true}` - both fields
//! optional; a line that is not valid JSON is logged and skipped.

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use floater_core::{DisplayController, FixedHost, FloaterConfig, UpdateEvent};

/// Headless surface shell for the floater overlay widget
#[derive(Parser, Debug)]
#[command(name = "floater-headless")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Initial content served by the embedded host (empty keeps the
    /// placeholder)
    #[arg(short = 'i', long, env = "FLOATER_INITIAL_CONTENT", default_value = "")]
    initial_content: String,

    /// Placeholder text shown until content arrives
    #[arg(short = 'p', long, env = "FLOATER_PLACEHOLDER")]
    placeholder: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "FLOATER_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

/// Initialize logging with the specified level.
fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "floater_headless={level},floater_core={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        // Frames own stdout; logs go to stderr.
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut config = FloaterConfig::from_env();
    if let Some(placeholder) = args.placeholder {
        config.placeholder = placeholder;
    }

    let host = FixedHost::new(args.initial_content);
    let (controller, handle) = DisplayController::new(host, config);

    let mut frames = handle.frames();
    let events = handle.events();
    // Only the feeder task may keep the event channel open; holding the
    // handle here would keep the controller running after stdin closes.
    drop(handle);

    // Frame printer: one line per re-render, starting with the current frame.
    let printer = tokio::spawn(async move {
        let mut frame = frames.borrow_and_update().clone();
        println!("{frame}");
        while frames.changed().await.is_ok() {
            frame = frames.borrow_and_update().clone();
            println!("{frame}");
        }
    });

    // Event feeder: newline-delimited JSON update events on stdin.
    let feeder = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    match serde_json::from_str::<UpdateEvent>(trimmed) {
                        Ok(event) => {
                            if events.send(event).await.is_err() {
                                break;
                            }
                        }
                        Err(e) => warn!(error = %e, "ignoring malformed update event"),
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "stdin read failed");
                    break;
                }
            }
        }
        // Dropping the sender ends the controller's subscription.
    });

    let controller_task = tokio::spawn(controller.run());

    tokio::select! {
        result = controller_task => {
            result.context("display controller task failed")?;
            info!("event stream closed, exiting");
            // The controller dropped its frame channel; let the printer
            // write the last frame and finish.
            let _ = printer.await;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("interrupt received, shutting down");
            printer.abort();
        }
    }

    feeder.abort();
    Ok(())
}
