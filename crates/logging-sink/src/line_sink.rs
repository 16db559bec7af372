//! crates/logging-sink/src/line_sink.rs
//! Newline-terminated line writer.

use std::io::{self, Write};

/// Writes rendered diagnostics to an [`io::Write`] target, one line per call.
///
/// Every call to [`write_line`](Self::write_line) emits the text followed by a
/// single `\n`. Text that already ends with a newline is written unchanged so
/// a caller that pre-terminates its lines never produces blank lines.
///
/// # Examples
///
/// ```
/// use logging_sink::LineSink;
///
/// let mut sink = LineSink::new(Vec::new());
/// sink.write_line("first")?;
/// sink.write_line("second\n")?;
///
/// assert_eq!(sink.into_inner(), b"first\nsecond\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineSink<W> {
    writer: W,
}

impl<W> LineSink<W> {
    /// Creates a sink that writes into `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> LineSink<W>
where
    W: Write,
{
    /// Writes `line` and a trailing newline.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        if !line.ends_with('\n') {
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
