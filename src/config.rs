use std::env;
use std::path::PathBuf;

use crate::constants::{
	ALL_INTERFACES, DEFAULT_INTERFACE, DEFAULT_PROC_ROOT, ENV_INTERFACE, ENV_PROC_ROOT, LOADAVG_FILE, NET_DEV_FILE,
	STAT_FILE, UPTIME_FILE,
};

/// Where the monitor reads its counters from
///
/// Resolved once at startup. Command-line arguments are never consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Directory standing in for `/proc`
	pub proc_root: PathBuf,
	/// Interface whose byte counters are reported; `None` sums all of them
	pub interface: Option<String>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			proc_root: PathBuf::from(DEFAULT_PROC_ROOT),
			interface: Some(DEFAULT_INTERFACE.to_string()),
		}
	}
}

impl Config {
	/// Creates a config rooted at `proc_root` with the default interface
	pub fn with_proc_root(proc_root: impl Into<PathBuf>) -> Self {
		Self {
			proc_root: proc_root.into(),
			..Self::default()
		}
	}

	/// Reads overrides from the process environment
	pub fn from_env() -> Self {
		Self::from_lookup(|key| env::var(key).ok())
	}

	/// Builds a config from an arbitrary variable lookup
	pub fn from_lookup<F>(lookup: F) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut config = Self::default();

		if let Some(root) = lookup(ENV_PROC_ROOT).filter(|root| !root.trim().is_empty()) {
			config.proc_root = PathBuf::from(root);
		}

		if let Some(interface) = lookup(ENV_INTERFACE) {
			let interface = interface.trim();
			config.interface = if interface.is_empty() || interface == ALL_INTERFACES {
				None
			} else {
				Some(interface.trim_end_matches(':').to_string())
			};
		}

		config
	}

	fn proc_file(&self, name: &str) -> PathBuf {
		self.proc_root.join(name)
	}

	pub fn stat_path(&self) -> PathBuf {
		self.proc_file(STAT_FILE)
	}

	pub fn net_dev_path(&self) -> PathBuf {
		self.proc_file(NET_DEV_FILE)
	}

	pub fn uptime_path(&self) -> PathBuf {
		self.proc_file(UPTIME_FILE)
	}

	pub fn loadavg_path(&self) -> PathBuf {
		self.proc_file(LOADAVG_FILE)
	}
}
