use std::io::{self, Write};
use std::time::Duration;

use log::{debug, warn};

use crate::config::Config;
use crate::constants::SAMPLE_INTERVAL_US;
use crate::display::{draw_done, draw_status_line, format_status_line};
use crate::reading::TickReading;
use crate::samplers::{Sampler, default_samplers};
use crate::signal::ShutdownFlag;
use crate::snapshot::{ProcStatSource, SnapshotSource};
use crate::util::cpu::CpuUtilization;

/// Drives the sampling loop and owns all state carried between ticks
#[derive(Debug)]
pub struct Monitor<S> {
	source: S,
	cpu: CpuUtilization,
	samplers: Vec<Box<dyn Sampler>>,
	last_utilization: Option<f64>,
	ticks: u64,
}

impl Monitor<ProcStatSource> {
	/// Creates a monitor reading every file under the configured proc root
	pub fn from_config(config: &Config) -> Self {
		Self::new(ProcStatSource::new(config.stat_path()), default_samplers(config))
	}
}

impl<S: SnapshotSource> Monitor<S> {
	pub fn new(source: S, samplers: Vec<Box<dyn Sampler>>) -> Self {
		Self {
			source,
			cpu: CpuUtilization::new(),
			samplers,
			last_utilization: None,
			ticks: 0,
		}
	}

	/// Number of ticks completed so far
	pub fn ticks(&self) -> u64 {
		self.ticks
	}

	pub fn cpu(&self) -> &CpuUtilization {
		&self.cpu
	}

	/// Collects one reading from the snapshot source and every sampler
	///
	/// Only a CPU source failure on the very first tick is returned as an
	/// error. Later CPU failures reuse the last utilization, and sampler
	/// failures drop that sampler's fragment for this tick.
	pub fn sample(&mut self) -> io::Result<TickReading> {
		let cpu_utilization = match self.source.read_line() {
			Ok(line) => {
				let utilization = self.cpu.estimate(&line);
				self.last_utilization = Some(utilization);
				utilization
			},
			Err(e) if self.ticks == 0 => return Err(e),
			Err(e) => {
				warn!("cpu counters unavailable, showing last value: {}", e);
				self.last_utilization.unwrap_or(0.0)
			},
		};

		let mut fragments = Vec::with_capacity(self.samplers.len());
		for sampler in &self.samplers {
			match sampler.sample() {
				Ok(fragment) => fragments.push(fragment),
				Err(e) => warn!("{} sample failed: {}", sampler.name(), e),
			}
		}

		Ok(TickReading {
			cpu_utilization,
			fragments,
		})
	}

	/// Samples once and redraws the status line
	pub fn tick<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
		let reading = self.sample()?;
		self.ticks += 1;
		draw_status_line(out, &format_status_line(&reading))
	}

	/// Ticks until `shutdown` is requested, then prints the final message
	///
	/// The flag is polled once per interval, after `sleep` returns, so a
	/// request is honored at most one interval late.
	pub fn run<W, F>(&mut self, shutdown: &ShutdownFlag, out: &mut W, mut sleep: F) -> io::Result<()>
	where
		W: Write,
		F: FnMut(Duration),
	{
		let interval = Duration::from_micros(SAMPLE_INTERVAL_US);

		while !shutdown.is_requested() {
			self.tick(out)?;
			sleep(interval);
		}

		debug!("shutdown requested after {} ticks", self.ticks);
		draw_done(out)
	}
}
