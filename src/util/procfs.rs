use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads the first line of a kernel pseudo-file
///
/// The file is opened and closed within the call. An empty file is reported
/// as `UnexpectedEof`.
pub fn read_first_line(path: &Path) -> io::Result<String> {
	let mut reader = BufReader::new(File::open(path)?);
	let mut line = String::new();
	if reader.read_line(&mut line)? == 0 {
		return Err(io::Error::new(
			io::ErrorKind::UnexpectedEof,
			format!("{} is empty", path.display()),
		));
	}
	Ok(line)
}

/// Builds an `InvalidData` error naming the file that could not be parsed
pub fn malformed(path: &Path, what: &str) -> io::Error {
	io::Error::new(
		io::ErrorKind::InvalidData,
		format!("malformed {} in {}", what, path.display()),
	)
}
