use std::io;
use std::path::PathBuf;

use crate::samplers::{Fragment, Sampler};
use crate::util::procfs::{malformed, read_first_line};

/// Scheduler entity counts from `/proc/loadavg`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessCounts {
	/// Currently runnable
	pub active: u32,
	pub total: u32,
	/// Most recently assigned PID
	pub recent_pid: u32,
}

impl ProcessCounts {
	/// Parses `0.20 0.18 0.12 1/80 11206`
	///
	/// The three load averages must be present but are not kept.
	pub fn parse(line: &str) -> Option<Self> {
		let mut parts = line.split_whitespace();
		for _ in 0..3 {
			parts.next()?.parse::<f64>().ok()?;
		}

		let (active, total) = parts.next()?.split_once('/')?;
		let recent_pid = parts.next()?.parse().ok()?;

		Some(Self {
			active: active.parse().ok()?,
			total: total.parse().ok()?,
			recent_pid,
		})
	}
}

/// Reads `/proc/loadavg`
#[derive(Debug, Clone)]
pub struct LoadAvgSampler {
	path: PathBuf,
}

impl LoadAvgSampler {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl Sampler for LoadAvgSampler {
	fn name(&self) -> &'static str {
		"loadavg"
	}

	fn sample(&self) -> io::Result<Fragment> {
		let line = read_first_line(&self.path)?;
		ProcessCounts::parse(&line)
			.map(Fragment::Processes)
			.ok_or_else(|| malformed(&self.path, "loadavg line"))
	}
}
