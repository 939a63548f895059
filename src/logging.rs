use std::env;

/// Initialize logging.
///
/// Log lines go to stderr so they never land inside the status line on
/// stdout. `RUST_LOG` wins over the build-dependent default.
pub fn init() {
	let filter = env::var("RUST_LOG").unwrap_or_else(|_| {
		if cfg!(debug_assertions) {
			"procline=debug".to_string()
		} else {
			"procline=info".to_string()
		}
	});

	let _ = pretty_env_logger::formatted_timed_builder()
		.parse_filters(&filter)
		.try_init();
}
