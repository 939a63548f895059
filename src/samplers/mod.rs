pub mod loadavg;
pub mod net;
pub mod uptime;

use std::fmt::{self, Debug};
use std::io;

use crate::config::Config;
use crate::samplers::loadavg::{LoadAvgSampler, ProcessCounts};
use crate::samplers::net::{NetTotals, NetworkSampler};
use crate::samplers::uptime::{Uptime, UptimeSampler};

/// One formatted piece of the status line produced by a peripheral sampler
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fragment {
	Network(NetTotals),
	Processes(ProcessCounts),
	Uptime(Uptime),
}

impl fmt::Display for Fragment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Fragment::Network(net) => write!(
				f,
				"Total Received Bytes: {} | Total Transmitted Bytes: {}",
				net.received_bytes, net.transmitted_bytes
			),
			Fragment::Processes(procs) => write!(
				f,
				"Active/Total Processes: {}/{} | Recent PID: {}",
				procs.active, procs.total, procs.recent_pid
			),
			Fragment::Uptime(uptime) => write!(
				f,
				"Total Uptime: {:5.1}s | Idle Time: {:5.1}s",
				uptime.uptime_secs, uptime.idle_secs
			),
		}
	}
}

/// A stateless reader for one kernel counter file
///
/// Each call opens, scans and closes its file. Failures are returned to the
/// caller, which decides how the status line degrades.
pub trait Sampler: Debug {
	/// Short name used in log messages
	fn name(&self) -> &'static str;

	/// Reads the source file and produces this sampler's fragment
	fn sample(&self) -> io::Result<Fragment>;
}

/// Builds the peripheral samplers in status line order
pub fn default_samplers(config: &Config) -> Vec<Box<dyn Sampler>> {
	vec![
		Box::new(NetworkSampler::new(config.net_dev_path(), config.interface.clone())),
		Box::new(LoadAvgSampler::new(config.loadavg_path())),
		Box::new(UptimeSampler::new(config.uptime_path())),
	]
}
