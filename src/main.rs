use std::process;

use anyhow::{Context, Result};
use log::error;

use procline::config::Config;
use procline::{logging, run_monitor, signal};

fn run() -> Result<()> {
	let config = Config::from_env();
	let shutdown = signal::install_interrupt_handler().context("failed to install SIGINT handler")?;

	run_monitor(&config, shutdown)
		.with_context(|| format!("monitoring {} failed", config.stat_path().display()))
}

// Arguments are ignored
fn main() {
	logging::init();

	if let Err(e) = run() {
		error!("{:#}", e);
		process::exit(1);
	}
}
