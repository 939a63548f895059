pub mod config;
pub mod constants;
pub mod display;
pub mod logging;
pub mod monitor;
pub mod reading;
pub mod samplers;
pub mod signal;
pub mod snapshot;
pub mod util;

use std::io::{self, Write};
use std::thread;

use log::info;

use crate::config::Config;
use crate::monitor::Monitor;
use crate::signal::ShutdownFlag;

/// Runs the status line monitor until `shutdown` is requested
///
/// This is the main entry point for the monitoring functionality. Returns an
/// error only if the CPU counters cannot be read on the first tick or the
/// terminal cannot be written.
pub fn run_monitor(config: &Config, shutdown: &ShutdownFlag) -> io::Result<()> {
	info!(
		"reading counters from {} (interface: {})",
		config.proc_root.display(),
		config.interface.as_deref().unwrap_or("all")
	);

	let stdout = io::stdout();
	let mut out = stdout.lock();

	writeln!(
		out,
		"Monitoring {} logical CPUs every {} ms...",
		num_cpus::get(),
		constants::SAMPLE_INTERVAL_US / 1000
	)?;
	writeln!(out, "Press Ctrl+C to stop.")?;

	let mut monitor = Monitor::from_config(config);
	monitor.run(shutdown, &mut out, thread::sleep)
}
