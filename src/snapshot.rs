use std::io;
use std::path::{Path, PathBuf};

use crate::constants::CPU_COUNTER_FIELDS;
use crate::util::procfs::read_first_line;

/// Aggregate CPU counters from the first line of `/proc/stat`
///
/// Every value is a cumulative tick count since boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuSnapshot {
	pub user: u64,
	pub nice: u64,
	pub system: u64,
	pub idle: u64,
	pub iowait: u64,
	pub irq: u64,
	pub softirq: u64,
}

impl CpuSnapshot {
	/// Parses a raw counter line such as `cpu  100 0 0 800 0 0 100 0 0 0`
	///
	/// The first token is a label and is skipped. The next seven tokens must be
	/// unsigned integers; anything after them is ignored.
	pub fn parse(line: &str) -> Option<Self> {
		let mut parts = line.split_whitespace();
		parts.next()?;

		let mut counters = [0u64; CPU_COUNTER_FIELDS];
		for slot in counters.iter_mut() {
			*slot = parts.next()?.parse().ok()?;
		}

		let [user, nice, system, idle, iowait, irq, softirq] = counters;
		Some(Self {
			user,
			nice,
			system,
			idle,
			iowait,
			irq,
			softirq,
		})
	}

	/// Sum of all seven counters
	pub fn total(&self) -> u64 {
		self.user
			.saturating_add(self.nice)
			.saturating_add(self.system)
			.saturating_add(self.idle)
			.saturating_add(self.iowait)
			.saturating_add(self.irq)
			.saturating_add(self.softirq)
	}
}

/// Supplies one raw line of aggregate CPU counters per call
pub trait SnapshotSource {
	fn read_line(&mut self) -> io::Result<String>;
}

/// Reads the first line of a `stat` file, reopening it on every call
#[derive(Debug, Clone)]
pub struct ProcStatSource {
	path: PathBuf,
}

impl ProcStatSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl SnapshotSource for ProcStatSource {
	fn read_line(&mut self) -> io::Result<String> {
		read_first_line(&self.path)
	}
}
