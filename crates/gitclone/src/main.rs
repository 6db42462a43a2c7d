#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
//! Command-line interface for cloning repositories via the libgitclone crate.

use std::{
    io::{self, IsTerminal, Write},
    path::PathBuf,
    process,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use gitclone_term::{Output, Quiet, Terminal};
use libgitclone::{CloneOptions, CloneStatus, Git};
use tokio::task;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Command-line argument definitions.
mod args;
/// Output helpers shared by the entry point.
mod ui;
/// Path helpers.
mod utils;

use args::Cli;
use ui::{emit, report_failure};
use utils::expand_tilde;

/// Install the diagnostic log subscriber. `RUST_LOG` overrides the default
/// level, and quiet mode silences it entirely.
fn init_logging(quiet: bool) {
    let default_level = if quiet {
        LevelFilter::OFF
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the blocking clone on tokio's blocking pool so the runtime's worker
/// threads stay free while `git` runs.
async fn clone_blocking(git: Git, url: String, destination: PathBuf) -> Result<CloneStatus> {
    let status = task::spawn_blocking(move || git.clone_sync(url, destination))
        .await
        .context("Blocking clone task failed")??;
    Ok(status)
}

/// Clone the requested repository, reporting progress through `output`.
async fn run(cli: Cli, output: &Arc<dyn Output>) -> Result<()> {
    let options = CloneOptions {
        cwd: cli.cwd.as_deref().map(expand_tilde),
    };
    let destination = expand_tilde(&cli.destination);

    let git = Git::from_options(&options).context("Failed to resolve working directory")?;
    emit(output.message(&format!("cloning {}", cli.url)))?;

    if cli.sync {
        clone_blocking(git, cli.url.clone(), destination)
            .await?
            .into_result()
            .with_context(|| format!("Failed to clone {}", cli.url))?;
    } else {
        git.clone(&cli.url, &destination)
            .await
            .with_context(|| format!("Failed to clone {}", cli.url))?;
    }

    emit(output.success("clone complete"))?;
    emit(output.finish())?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    // Determine color output preference early for error handling
    let color = if cli.color {
        true
    } else if cli.no_color {
        false
    } else {
        // Auto-detect based on terminal
        io::stdout().is_terminal()
    };

    let output: Arc<dyn Output> = if cli.quiet {
        Arc::new(Quiet)
    } else {
        Arc::new(Terminal::new(color))
    };

    if let Err(e) = run(cli, &output).await {
        // Reset any existing colors only if color was enabled and stdout is a TTY
        if color && io::stdout().is_terminal() {
            print!("\x1b[0m");
            if let Err(flush_err) = io::stdout().flush() {
                eprintln!("Failed to flush stdout while resetting colors: {flush_err}");
            }
        }

        process::exit(report_failure(&output, &e));
    }
}
