// Kernel counter files, relative to the proc root
pub const DEFAULT_PROC_ROOT: &str = "/proc";
pub const STAT_FILE: &str = "stat";
pub const NET_DEV_FILE: &str = "net/dev";
pub const UPTIME_FILE: &str = "uptime";
pub const LOADAVG_FILE: &str = "loadavg";

// /proc/net/dev starts with two header lines
pub const NET_DEV_HEADER_LINES: usize = 2;

// Number of leading counters read from the aggregate cpu line
pub const CPU_COUNTER_FIELDS: usize = 7;

// Sampling settings
pub const SAMPLE_INTERVAL_US: u64 = 500_000;

// Environment overrides
pub const ENV_PROC_ROOT: &str = "PROCLINE_PROC_ROOT";
pub const ENV_INTERFACE: &str = "PROCLINE_INTERFACE";
pub const DEFAULT_INTERFACE: &str = "lo";
pub const ALL_INTERFACES: &str = "*";

pub const DONE_MESSAGE: &str = "Done!";
