//! Commandox CLI - Main entry point.
//!
//! Runs the sample commands against a console sender, either once with
//! `--exec` or for every line read from stdin.

use std::io::BufRead;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use commandox_cli::demo::{self, Team};
use commandox_cli::{Cli, ConsoleSender, Host, HostConfig};
use commandox_core::OnlineEntities;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter_str = match std::env::var("RUST_LOG") {
        Ok(rust_log) => rust_log,
        Err(_) => cli.effective_log_level().env_filter(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(&filter_str)
        .with_writer(std::io::stderr)
        .init();

    let config = HostConfig::load(cli.config.as_deref())?;
    let entities = OnlineEntities::with_names(config.entities.online.iter().cloned());
    let dispatchers = demo::dispatchers(
        Arc::new(entities),
        &config.messages,
        Arc::new(Team::default()),
    )?;
    let host = Host::new(config.messages.clone()).with_dispatchers(dispatchers);

    let sender =
        ConsoleSender::new(&config.console, std::io::stdout()).with_raw_codes(cli.raw_codes);

    if let Some(line) = cli.exec.as_deref() {
        host.handle_line(&sender, line);
        return Ok(());
    }

    info!(commands = ?host.commands().collect::<Vec<_>>(), "reading commands from stdin");
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if let Some(outcome) = host.handle_line(&sender, &line) {
            tracing::debug!(?outcome, "command handled");
        }
    }
    Ok(())
}
