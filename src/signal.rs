use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

/// Set-once flag shared between the interrupt handler and the sampling loop
#[derive(Debug, Default)]
pub struct ShutdownFlag(AtomicBool);

impl ShutdownFlag {
	pub const fn new() -> Self {
		Self(AtomicBool::new(false))
	}

	/// Marks shutdown as requested. Async-signal-safe.
	pub fn request(&self) {
		self.0.store(true, Ordering::SeqCst);
	}

	pub fn is_requested(&self) -> bool {
		self.0.load(Ordering::SeqCst)
	}
}

static SHUTDOWN: ShutdownFlag = ShutdownFlag::new();

// Runs on the signal path: no allocation, no I/O, no locks
extern "C" fn handle_interrupt(_signum: libc::c_int) {
	SHUTDOWN.request();
}

/// Routes SIGINT to the process-wide shutdown flag and returns that flag
pub fn install_interrupt_handler() -> io::Result<&'static ShutdownFlag> {
	let handler = handle_interrupt as extern "C" fn(libc::c_int) as libc::sighandler_t;

	// SAFETY: the handler only performs an atomic store
	let previous = unsafe { libc::signal(libc::SIGINT, handler) };
	if previous == libc::SIG_ERR {
		return Err(io::Error::last_os_error());
	}

	Ok(&SHUTDOWN)
}
