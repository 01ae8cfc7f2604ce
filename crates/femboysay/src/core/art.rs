//! Streams an ASCII art file to an output sink
//!
//! The file is copied line by line as raw bytes, so art containing non-UTF-8
//! bytes or very long lines comes through unchanged. Each line is written with
//! a single `\n` terminator: a trailing `\r` is dropped and a final line
//! without a newline still gets one.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, span, Level};

use super::SayError;

/// Prints art files verbatim
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtPrinter;

impl ArtPrinter {
    pub fn new() -> Self {
        Self
    }

    /// Print the art file at `path` to standard output
    pub fn print(&self, path: impl AsRef<Path>) -> Result<(), SayError> {
        let stdout = io::stdout();
        self.print_to(path, stdout.lock())
    }

    /// Stream the art file at `path` into `writer`
    ///
    /// Fails with [`SayError::ArtOpen`] if the file cannot be opened and
    /// [`SayError::ArtRead`] if reading fails part way through. The file is
    /// closed on every return path.
    pub fn print_to<W: Write>(&self, path: impl AsRef<Path>, mut writer: W) -> Result<(), SayError> {
        let path = path.as_ref();
        let print_span = span!(Level::DEBUG, "print_art", path = %path.display());
        let _enter = print_span.enter();

        let file = File::open(path).map_err(|e| SayError::art_open(path, e))?;
        let mut reader = BufReader::new(file);

        let mut buf = Vec::new();
        let mut line_count = 0usize;
        let mut byte_count = 0usize;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| SayError::art_read(path, e))?;
            if read == 0 {
                break;
            }
            byte_count += read;
            line_count += 1;

            writer.write_all(strip_line_ending(&buf))?;
            writer.write_all(b"\n")?;
        }

        writer.flush()?;
        debug!(lines = line_count, bytes = byte_count, "Printed art file");
        Ok(())
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
