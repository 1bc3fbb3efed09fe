//! Error types for the wire protocol.

use std::fmt;
use std::io;

/// Errors produced while reading the judge's wire protocol.
///
/// The decision core has no failure modes; everything here comes from the
/// protocol adapter and is fatal for the session.
#[derive(Debug)]
pub enum ProtocolError {
    /// Underlying I/O failure while reading input.
    Io(io::Error),
    /// Input ended in the middle of a startup or turn block.
    UnexpectedEof,
    /// A line did not have the expected shape.
    Malformed {
        /// What the parser was reading when it gave up.
        expected: &'static str,
        /// The offending line, trimmed.
        line: String,
    },
    /// A legal-action descriptor could not be parsed.
    BadAction(String),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::Io(e) => write!(f, "protocol read failed: {e}"),
            ProtocolError::UnexpectedEof => write!(f, "input ended mid-block"),
            ProtocolError::Malformed { expected, line } => {
                write!(f, "malformed {expected} line: {line:?}")
            }
            ProtocolError::BadAction(line) => write!(f, "unparseable action: {line:?}"),
        }
    }
}

impl std::error::Error for ProtocolError {}

impl From<io::Error> for ProtocolError {
    fn from(e: io::Error) -> Self {
        ProtocolError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_offending_line() {
        let e = ProtocolError::Malformed {
            expected: "cell",
            line: "0 x y".to_string(),
        };
        let text = e.to_string();
        assert!(text.contains("cell"));
        assert!(text.contains("0 x y"));
    }

    #[test]
    fn test_io_conversion() {
        let io = io::Error::new(io::ErrorKind::BrokenPipe, "gone");
        let e = ProtocolError::from(io);
        assert!(matches!(e, ProtocolError::Io(_)));
    }
}
