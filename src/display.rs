use std::io::{self, Write};

use crate::constants::DONE_MESSAGE;
use crate::reading::TickReading;

// Return to column 0 and erase the whole line
const REDRAW_PREFIX: &str = "\r\x1B[2K";
const FIELD_SEPARATOR: &str = " | ";

/// Formats a tick reading into the status line text, without control codes
pub fn format_status_line(reading: &TickReading) -> String {
	let mut line = format!("CPU Utilization: {:5.1}%", reading.cpu_utilization);
	for fragment in &reading.fragments {
		line.push_str(FIELD_SEPARATOR);
		line.push_str(&fragment.to_string());
	}
	line
}

/// Overwrites the current terminal line with `line` and flushes
pub fn draw_status_line<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
	write!(out, "{REDRAW_PREFIX}{line}")?;
	out.flush()
}

/// Replaces the status line with the final message and ends the line
pub fn draw_done<W: Write>(out: &mut W) -> io::Result<()> {
	writeln!(out, "{REDRAW_PREFIX}{DONE_MESSAGE}")?;
	out.flush()
}
