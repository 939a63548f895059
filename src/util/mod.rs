pub mod cpu;
pub mod procfs;

/// Calculates busy percentage from idle and total tick deltas
///
/// # Arguments
///
/// * `idle_delta` - Idle ticks elapsed since the previous snapshot
/// * `total_delta` - Total ticks elapsed since the previous snapshot
///
/// # Returns
///
/// `(1 - idle/total) * 100`, or `0.0` when no ticks elapsed
pub fn utilization_percent(idle_delta: u64, total_delta: u64) -> f64 {
	if total_delta == 0 {
		return 0.0;
	}
	(1.0 - idle_delta as f64 / total_delta as f64) * 100.0
}
