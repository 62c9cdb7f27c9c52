//! Termfolio — browse a developer portfolio by typing commands.
//!
//! Runs the full-screen terminal UI, or answers a single command with
//! `--print` for use in scripts and shells without a TTY.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::warn;

use termfolio::config::Settings;
use termfolio::logging;
use termfolio::session::{resolve, Resolution};
use termfolio::tui::App;

#[derive(Debug, Parser)]
#[command(name = "termfolio", version, about = "A portfolio you explore from the terminal")]
struct Args {
    /// Config file (default: ~/.termfolio/config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Colour theme by name (eg: "phosphor", "amber", "plain")
    #[arg(long)]
    theme: Option<String>,

    /// Milliseconds between revealed characters; 0 shows answers at once
    #[arg(long)]
    typing_interval_ms: Option<u64>,

    /// Diagnostics log file (default: termfolio.log in the temp dir)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the answer to one command and exit
    #[arg(long, value_name = "COMMAND")]
    print: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(command) = args.print.as_deref() {
        print_answer(command);
        return Ok(());
    }

    let mut settings = match args.config.as_deref() {
        Some(path) => Settings::load_from(path),
        None => Settings::load_default(),
    }
    .context("failed to load settings")?;
    settings.apply_overrides(args.theme, args.typing_interval_ms, args.log_file);

    let log_path = settings
        .log_file
        .clone()
        .unwrap_or_else(logging::default_log_path);
    if !logging::init_global(&log_path) {
        eprintln!("warning: logging disabled, cannot write {}", log_path.display());
    }

    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = shutdown.clone();
    if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
        warn!(error = %e, "failed to install signal handler");
    }

    let mut app = App::new(&settings, Instant::now())
        .context("invalid settings")?
        .with_shutdown_flag(shutdown);

    let mut terminal = ratatui::try_init().context("failed to initialise terminal")?;
    let result = app.run(&mut terminal);
    ratatui::restore();

    result.context("terminal error")
}

/// Write the raw answer for `command` to stdout.
fn print_answer(command: &str) {
    match resolve(command) {
        Resolution::Append(entry) => println!("{}", entry.output),
        Resolution::Ignore | Resolution::Reset => {}
    }
}
