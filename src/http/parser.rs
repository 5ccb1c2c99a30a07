use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};
use tracing::trace;

use crate::http::error::ParseError;
use crate::http::request::{HeaderMap, Method, Request, StartLine, content_length};

const CRLF: &[u8] = b"\r\n";

/// Reads one CRLF-terminated line.
///
/// Returns the line with the CRLF stripped, together with the number of bytes
/// consumed from the reader (CRLF included). A bare `\n` does not end a line.
/// There is no upper bound on line length.
pub async fn read_line<R>(reader: &mut R) -> Result<(Vec<u8>, usize), ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = Vec::new();

    loop {
        let n = reader.read_until(b'\n', &mut line).await?;
        if n == 0 {
            return Err(ParseError::EndOfStream);
        }
        if line.ends_with(CRLF) {
            break;
        }
    }

    let consumed = line.len();
    line.truncate(consumed - CRLF.len());
    Ok((line, consumed))
}

/// Reads a full request: start line, headers up to the blank line, and a
/// body of exactly `Content-Length` bytes when that header is numeric.
pub async fn parse_request<R>(reader: &mut R) -> Result<Request, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let start_line = read_start_line(reader).await?;
    trace!(
        method = %start_line.method,
        path = %start_line.path,
        version = %start_line.version,
        "start line parsed"
    );

    let headers = read_headers(reader).await?;
    trace!(count = headers.len(), "headers parsed");

    let body = match content_length(&headers) {
        Some(len) => Some(read_body(reader, len).await?),
        None => None,
    };

    Ok(Request {
        start_line,
        headers,
        body,
    })
}

/// Reads exactly `len` body bytes. The buffer grows only as bytes arrive, so
/// a large declared length costs nothing until the client actually sends it.
async fn read_body<R>(reader: &mut R, len: usize) -> Result<Vec<u8>, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut body = Vec::new();
    let n = (&mut *reader)
        .take(len as u64)
        .read_to_end(&mut body)
        .await
        .map_err(ParseError::BodyReadError)?;

    if n < len {
        trace!(expected = len, received = n, "body cut short");
        return Err(ParseError::BodyReadError(io::ErrorKind::UnexpectedEof.into()));
    }

    trace!(len, "body read");
    Ok(body)
}

async fn read_start_line<R>(reader: &mut R) -> Result<StartLine, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let (raw, _) = read_line(reader).await?;
    let line = String::from_utf8_lossy(&raw);

    let parts: Vec<&str> = line.split(' ').collect();
    if let [method, path, version] = parts.as_slice() {
        return Ok(StartLine {
            method: Method::from(*method),
            path: path.to_string(),
            version: version.to_string(),
        });
    }

    Err(ParseError::MalformedStartLine(line.to_string()))
}

async fn read_headers<R>(reader: &mut R) -> Result<HeaderMap, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut headers = HeaderMap::new();

    loop {
        let (raw, _) = read_line(reader).await?;
        if raw.is_empty() {
            break;
        }

        let line = String::from_utf8_lossy(&raw);
        let parts: Vec<&str> = line.split(": ").collect();
        let [name, value] = parts.as_slice() else {
            return Err(ParseError::MalformedHeaderLine(line.to_string()));
        };
        headers.insert(name.to_string(), value.to_string());
    }

    Ok(headers)
}
