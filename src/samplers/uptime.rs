use std::io;
use std::path::PathBuf;

use crate::samplers::{Fragment, Sampler};
use crate::util::procfs::{malformed, read_first_line};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Uptime {
	pub uptime_secs: f64,
	/// Summed across all CPUs, so it can exceed `uptime_secs`
	pub idle_secs: f64,
}

impl Uptime {
	/// Parses `12345.67 54321.00`
	pub fn parse(line: &str) -> Option<Self> {
		let mut parts = line.split_whitespace();
		let uptime_secs = parts.next()?.parse().ok()?;
		let idle_secs = parts.next()?.parse().ok()?;
		Some(Self { uptime_secs, idle_secs })
	}
}

/// Reads `/proc/uptime`
#[derive(Debug, Clone)]
pub struct UptimeSampler {
	path: PathBuf,
}

impl UptimeSampler {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl Sampler for UptimeSampler {
	fn name(&self) -> &'static str {
		"uptime"
	}

	fn sample(&self) -> io::Result<Fragment> {
		let line = read_first_line(&self.path)?;
		Uptime::parse(&line)
			.map(Fragment::Uptime)
			.ok_or_else(|| malformed(&self.path, "uptime line"))
	}
}
