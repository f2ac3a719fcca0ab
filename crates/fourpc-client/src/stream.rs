//! Line stream over the live game feed.

use std::fmt;
use std::io::BufRead;

use crate::error::{Error, Result};

/// Lazy, unbounded sequence of text lines read from an open connection.
///
/// `next()` blocks until a full line arrives. Trailing `\r` and `\n` are
/// stripped. The iterator ends when the server closes the connection or
/// [`close`](LineStream::close) is called; a read error is yielded once
/// and also ends it.
pub struct LineStream {
    reader: Option<Box<dyn BufRead + Send>>,
    lines_read: u64,
}

impl LineStream {
    /// Wrap an open reader.
    pub fn new(reader: Box<dyn BufRead + Send>) -> Self {
        Self {
            reader: Some(reader),
            lines_read: 0,
        }
    }

    /// Close the underlying connection. Later calls to `next()` return `None`.
    pub fn close(&mut self) {
        if self.reader.take().is_some() {
            tracing::info!(lines = self.lines_read, "stream closed by caller");
        }
    }

    /// Whether the connection has been closed, by either side.
    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }

    /// Number of lines yielded so far.
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }
}

impl Iterator for LineStream {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;

        let mut buf = Vec::new();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                tracing::info!(lines = self.lines_read, "stream ended by server");
                self.reader = None;
                None
            }
            Ok(_) => {
                let len = buf
                    .iter()
                    .rposition(|b| *b != b'\n' && *b != b'\r')
                    .map_or(0, |i| i + 1);
                buf.truncate(len);
                self.lines_read += 1;
                Some(Ok(String::from_utf8_lossy(&buf).into_owned()))
            }
            Err(e) => {
                tracing::warn!(error = %e, "stream read failed");
                self.reader = None;
                Some(Err(Error::Io(e)))
            }
        }
    }
}

impl fmt::Debug for LineStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineStream")
            .field("closed", &self.is_closed())
            .field("lines_read", &self.lines_read)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read};

    use super::*;

    fn stream_of(data: &str) -> LineStream {
        LineStream::new(Box::new(Cursor::new(data.as_bytes().to_vec())))
    }

    #[test]
    fn test_strips_line_endings_in_order() {
        let lines: Vec<String> = stream_of("first\r\nsecond\nthird\r\n")
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_final_line_without_newline() {
        let lines: Vec<String> = stream_of("a\nb").map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let lines: Vec<String> = stream_of("a\n\r\n\nb\n").map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["a", "", "", "b"]);
    }

    #[test]
    fn test_ends_cleanly_on_close() {
        let mut stream = stream_of("only\n");
        assert_eq!(stream.next().unwrap().unwrap(), "only");
        assert!(stream.next().is_none());
        assert!(stream.is_closed());
        assert!(stream.next().is_none());
        assert_eq!(stream.lines_read(), 1);
    }

    #[test]
    fn test_caller_close() {
        let mut stream = stream_of("a\nb\n");
        assert_eq!(stream.next().unwrap().unwrap(), "a");
        stream.close();
        assert!(stream.is_closed());
        assert!(stream.next().is_none());
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    #[test]
    fn test_read_error_yielded_once() {
        let mut stream = LineStream::new(Box::new(io::BufReader::new(FailingReader)));
        assert!(matches!(stream.next(), Some(Err(Error::Io(_)))));
        assert!(stream.next().is_none());
    }
}
