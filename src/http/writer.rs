use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

/// Serializes a response to wire bytes.
///
/// Header order follows map iteration and is not stable between runs. The
/// body is appended raw with no trailing terminator.
pub fn serialize_response(resp: &Response) -> Bytes {
    let header_len: usize = resp
        .headers
        .iter()
        .map(|(k, v)| k.len() + v.len() + 4)
        .sum();
    let mut buf = BytesMut::with_capacity(64 + header_len + resp.body.len());

    // Status line
    buf.put_slice(resp.status_line().as_bytes());
    buf.put_slice(b"\r\n");

    // Headers
    for (k, v) in &resp.headers {
        buf.put_slice(k.as_bytes());
        buf.put_slice(b": ");
        buf.put_slice(v.as_bytes());
        buf.put_slice(b"\r\n");
    }

    // Header/body separator
    buf.put_slice(b"\r\n");

    // Body
    buf.put_slice(&resp.body);

    buf.freeze()
}

pub struct ResponseWriter {
    buffer: Bytes,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub fn serialized_len(&self) -> usize {
        self.buffer.len()
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
