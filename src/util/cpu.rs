use log::debug;

use crate::snapshot::CpuSnapshot;
use crate::util::utilization_percent;

/// Tracks aggregate CPU utilization across successive `/proc/stat` samples
///
/// Holds exactly one previous snapshot, starting from all zeros. Because of
/// that zero start, the first successful estimate is the average since boot
/// rather than an instantaneous rate.
#[derive(Debug, Clone, Default)]
pub struct CpuUtilization {
	previous: CpuSnapshot,
}

impl CpuUtilization {
	/// Creates a new CpuUtilization tracker
	pub fn new() -> Self {
		Self::default()
	}

	/// The snapshot the next estimate will be measured against
	pub fn previous(&self) -> &CpuSnapshot {
		&self.previous
	}

	/// Estimates utilization in percent from one raw counter line
	///
	/// A line that does not parse returns `0.0` and leaves the stored snapshot
	/// untouched. A line that parses always replaces the stored snapshot, even
	/// when no ticks elapsed (which also yields `0.0`).
	pub fn estimate(&mut self, raw_line: &str) -> f64 {
		let Some(current) = CpuSnapshot::parse(raw_line) else {
			debug!("discarding malformed cpu line: {:?}", raw_line.trim_end());
			return 0.0;
		};

		let utilization = match current.total().checked_sub(self.previous.total()) {
			Some(total_delta) if total_delta > 0 => {
				let idle_delta = current.idle.saturating_sub(self.previous.idle);
				utilization_percent(idle_delta, total_delta)
			},
			_ => {
				debug!("no cpu ticks elapsed since previous sample");
				0.0
			},
		};

		self.previous = current;
		utilization
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	const FIRST: &str = "cpu  100 0 0 800 0 0 100";
	const SECOND: &str = "cpu  110 0 0 850 0 0 110";

	#[test]
	fn first_estimate_is_average_since_boot() {
		let mut cpu = CpuUtilization::new();
		assert!((cpu.estimate(FIRST) - 20.0).abs() < 1e-9);
	}

	#[test]
	fn second_estimate_uses_delta() {
		let mut cpu = CpuUtilization::new();
		cpu.estimate(FIRST);
		let util = cpu.estimate(SECOND);
		assert!((util - (1.0 - 50.0 / 70.0) * 100.0).abs() < 1e-9);
		assert!((util - 28.57).abs() < 0.01);
	}

	#[test]
	fn identical_snapshot_is_zero() {
		let mut cpu = CpuUtilization::new();
		cpu.estimate(FIRST);
		assert_eq!(cpu.estimate(FIRST), 0.0);
	}

	#[test]
	fn malformed_line_keeps_previous_snapshot() {
		let mut cpu = CpuUtilization::new();
		cpu.estimate(FIRST);
		let before = *cpu.previous();

		assert_eq!(cpu.estimate("cpu  110 0 0 850 0 0"), 0.0);
		assert_eq!(cpu.estimate("garbage"), 0.0);
		assert_eq!(*cpu.previous(), before);

		// Delta is still measured from the last well-formed sample
		assert!((cpu.estimate(SECOND) - 28.571).abs() < 0.01);
	}

	#[test]
	fn malformed_first_line_leaves_zero_state() {
		let mut cpu = CpuUtilization::new();
		assert_eq!(cpu.estimate("cpu"), 0.0);
		assert_eq!(*cpu.previous(), CpuSnapshot::default());
	}

	#[test]
	fn counter_reset_is_guarded_and_still_recorded() {
		let mut cpu = CpuUtilization::new();
		cpu.estimate(SECOND);
		assert_eq!(cpu.estimate(FIRST), 0.0);
		assert_eq!(cpu.previous().idle, 800);
	}

	fn counters() -> impl Strategy<Value = [u64; 7]> {
		prop::array::uniform7(0u64..1_000_000)
	}

	fn line(c: &[u64; 7]) -> String {
		format!("cpu  {} {} {} {} {} {} {} 0 0 0", c[0], c[1], c[2], c[3], c[4], c[5], c[6])
	}

	proptest! {
		#[test]
		fn monotonic_samples_stay_within_percent_range(
			start in counters(),
			steps in prop::collection::vec(counters(), 1..16),
		) {
			let mut cpu = CpuUtilization::new();
			let mut current = start;
			cpu.estimate(&line(&current));

			for step in steps {
				for (value, inc) in current.iter_mut().zip(step.iter()) {
					*value += inc;
				}
				let util = cpu.estimate(&line(&current));
				prop_assert!(util.is_finite());
				prop_assert!((0.0..=100.0).contains(&util));
			}
		}

		#[test]
		fn repeated_sample_is_always_zero(c in counters()) {
			let mut cpu = CpuUtilization::new();
			cpu.estimate(&line(&c));
			prop_assert_eq!(cpu.estimate(&line(&c)), 0.0);
		}

		#[test]
		fn short_lines_never_touch_state(c in counters(), keep in 0usize..7) {
			let mut cpu = CpuUtilization::new();
			cpu.estimate(&line(&c));
			let before = *cpu.previous();

			let short: Vec<String> = c.iter().take(keep).map(u64::to_string).collect();
			prop_assert_eq!(cpu.estimate(&format!("cpu {}", short.join(" "))), 0.0);
			prop_assert_eq!(*cpu.previous(), before);
		}
	}
}
