use std::mem;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use crate::http::parser::parse_request;
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::router::Router;

/// One request/response cycle over a client stream.
///
/// Connections are never reused: after the response is written (or the
/// request fails to parse) the stream is shut down.
pub struct Connection<S> {
    stream: BufReader<S>,
    router: Arc<Router>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>) -> Self {
        Self {
            stream: BufReader::new(stream),
            router,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let result = self.drive().await;
        self.state = ConnectionState::Closed;

        // Peer may already be gone; closing is best effort.
        if let Err(e) = self.stream.shutdown().await {
            debug!(error = %e, "shutdown failed");
        }

        result
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            match mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => match parse_request(&mut self.stream).await {
                    Ok(req) => {
                        self.state = ConnectionState::Processing(req);
                    }
                    Err(e) => {
                        // No response is sent for unparseable requests.
                        debug!(error = %e, "dropping connection after parse error");
                    }
                },

                ConnectionState::Processing(req) => {
                    let response = self.router.route(&req).await;
                    info!(
                        method = %req.method(),
                        path = %req.path(),
                        status = response.status.as_u16(),
                        "request handled"
                    );
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }
}
