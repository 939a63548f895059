use crate::samplers::Fragment;

/// Everything rendered on the status line for one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickReading {
	/// Aggregate CPU utilization in percent
	pub cpu_utilization: f64,

	/// Peripheral fragments in display order. Samplers that failed this tick
	/// are absent.
	pub fragments: Vec<Fragment>,
}
