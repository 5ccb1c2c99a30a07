use std::io;

use thiserror::Error;

/// Errors raised while reading a request off the wire.
///
/// None of these are turned into an HTTP response: the connection that
/// produced one is closed without writing anything back.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The first line did not split into exactly `METHOD PATH VERSION`.
    #[error("malformed start line: {0:?}")]
    MalformedStartLine(String),

    /// A header line did not split into exactly `Name: Value`.
    #[error("malformed header line: {0:?}")]
    MalformedHeaderLine(String),

    /// The stream failed or ended before `Content-Length` bytes arrived.
    #[error("failed to read request body: {0}")]
    BodyReadError(#[source] io::Error),

    /// The stream ended before a CRLF-terminated line was complete.
    #[error("stream ended before end of line")]
    EndOfStream,

    #[error("i/o error while reading request: {0}")]
    Io(#[from] io::Error),
}
