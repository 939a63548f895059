use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::constants::NET_DEV_HEADER_LINES;
use crate::samplers::{Fragment, Sampler};
use crate::util::procfs::malformed;

// Counter positions after the interface colon
const RX_BYTES_FIELD: usize = 0;
const TX_BYTES_FIELD: usize = 8;

/// Byte counters summed over the selected interfaces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetTotals {
	pub received_bytes: u64,
	pub transmitted_bytes: u64,
}

/// Reads `/proc/net/dev`
#[derive(Debug, Clone)]
pub struct NetworkSampler {
	path: PathBuf,
	/// Only rows for this interface are counted; `None` counts every row
	interface: Option<String>,
}

impl NetworkSampler {
	pub fn new(path: impl Into<PathBuf>, interface: Option<String>) -> Self {
		Self {
			path: path.into(),
			interface,
		}
	}

	fn matches(&self, name: &str) -> bool {
		self.interface.as_deref().is_none_or(|wanted| wanted == name)
	}
}

/// Splits one interface row into its name and (rx, tx) byte counters
///
/// Rows look like `  eth0: 1234 10 0 0 0 0 0 0 5678 ...`. Large counters can
/// leave no space after the colon, so the row is split at the colon.
pub fn parse_interface_row(row: &str) -> Option<(&str, u64, u64)> {
	let (name, counters) = row.split_once(':')?;
	let name = name.trim();
	if name.is_empty() {
		return None;
	}

	let fields: Vec<&str> = counters.split_whitespace().collect();
	let rx = fields.get(RX_BYTES_FIELD)?.parse().ok()?;
	let tx = fields.get(TX_BYTES_FIELD)?.parse().ok()?;
	Some((name, rx, tx))
}

impl Sampler for NetworkSampler {
	fn name(&self) -> &'static str {
		"network"
	}

	fn sample(&self) -> io::Result<Fragment> {
		let reader = BufReader::new(File::open(&self.path)?);
		let mut lines = reader.lines();

		for _ in 0..NET_DEV_HEADER_LINES {
			if lines.next().transpose()?.is_none() {
				return Err(malformed(&self.path, "header"));
			}
		}

		let mut totals = NetTotals::default();
		for line in lines {
			let line = line?;
			let Some((name, rx, tx)) = parse_interface_row(&line) else {
				continue;
			};
			if self.matches(name) {
				totals.received_bytes = totals.received_bytes.wrapping_add(rx);
				totals.transmitted_bytes = totals.transmitted_bytes.wrapping_add(tx);
			}
		}

		Ok(Fragment::Network(totals))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	const NET_DEV: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
    lo:  123456     100    0    0    0     0          0         0   123456     100    0    0    0     0       0          0
  eth0:98765432100  2000    0    0    0     0          0        12  5555     300    0    0    0     0       0          0
 wlan0:     700       7    0    0    0     0          0         0      800       8    0    0    0     0       0          0
";

	fn sample_with(contents: &str, interface: Option<&str>) -> io::Result<Fragment> {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("dev");
		fs::write(&path, contents).unwrap();
		NetworkSampler::new(&path, interface.map(str::to_string)).sample()
	}

	#[test]
	fn row_glued_to_colon_is_parsed() {
		assert_eq!(
			parse_interface_row("  eth0:98765432100  2000 0 0 0 0 0 12  5555 300"),
			Some(("eth0", 98765432100, 5555))
		);
		assert_eq!(parse_interface_row("  eth0: 1 2 3"), None);
		assert_eq!(parse_interface_row("no colon here"), None);
	}

	#[test]
	fn counts_only_the_selected_interface() {
		let fragment = sample_with(NET_DEV, Some("lo")).unwrap();
		assert_eq!(
			fragment,
			Fragment::Network(NetTotals {
				received_bytes: 123456,
				transmitted_bytes: 123456,
			})
		);
	}

	#[test]
	fn sums_every_interface_without_filter() {
		let fragment = sample_with(NET_DEV, None).unwrap();
		assert_eq!(
			fragment,
			Fragment::Network(NetTotals {
				received_bytes: 123456 + 98765432100 + 700,
				transmitted_bytes: 123456 + 5555 + 800,
			})
		);
	}

	#[test]
	fn unknown_interface_reports_zero() {
		let fragment = sample_with(NET_DEV, Some("eth9")).unwrap();
		assert_eq!(fragment, Fragment::Network(NetTotals::default()));
	}

	#[test]
	fn truncated_header_is_an_error() {
		let err = sample_with("Inter-|   Receive\n", None).unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::InvalidData);
	}

	#[test]
	fn missing_file_is_an_error() {
		let err = NetworkSampler::new("/nonexistent/procline/net/dev", None).sample().unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::NotFound);
	}
}
