//! Request routing.
//!
//! A request path resolves to exactly one [`Route`], checked top-down with
//! the first match winning:
//!
//! ```text
//!   /                 -> Root
//!   /echo/<msg>       -> Echo(msg)
//!   /user-agent       -> UserAgent
//!   /files/<name>     -> Files(name)
//!   anything else     -> NotFound
//! ```
//!
//! [`Router::route`] turns every request into a response. Failures inside a
//! handler become 404/405/500 responses and are never returned as errors.

pub mod files;

use tracing::{debug, warn};

use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};

pub use files::FileStore;

const ECHO_PREFIX: &str = "/echo/";
const FILES_PREFIX: &str = "/files/";

/// Where a request path leads. Prefix routes borrow the remainder of the
/// path, taken verbatim with no decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Root,
    Echo(&'a str),
    UserAgent,
    Files(&'a str),
    NotFound,
}

impl<'a> Route<'a> {
    pub fn resolve(path: &'a str) -> Self {
        if path == "/" {
            Route::Root
        } else if let Some(msg) = path.strip_prefix(ECHO_PREFIX) {
            Route::Echo(msg)
        } else if path == "/user-agent" {
            Route::UserAgent
        } else if let Some(name) = path.strip_prefix(FILES_PREFIX) {
            Route::Files(name)
        } else {
            Route::NotFound
        }
    }
}

/// Maps parsed requests to responses.
#[derive(Debug, Clone)]
pub struct Router {
    files: FileStore,
}

impl Router {
    pub fn new(files: FileStore) -> Self {
        Self { files }
    }

    pub async fn route(&self, req: &Request) -> Response {
        let route = Route::resolve(req.path());
        debug!(method = %req.method(), path = %req.path(), ?route, "routing request");

        match route {
            Route::Root => Response::ok(),
            Route::Echo(msg) => echo(req, msg),
            Route::UserAgent => user_agent(req),
            Route::Files(name) => match req.method() {
                Method::GET => self.serve_file(name).await,
                Method::POST => self.save_file(name, req.body()).await,
                _ => Response::empty(StatusCode::MethodNotAllowed),
            },
            Route::NotFound => Response::not_found(),
        }
    }

    async fn serve_file(&self, name: &str) -> Response {
        match self.files.read(name).await {
            Ok(contents) => {
                debug!(name, len = contents.len(), "served file");
                ResponseBuilder::new(StatusCode::Ok)
                    .content("application/octet-stream", contents)
                    .build()
            }
            Err(e) => {
                warn!(name, error = %e, "failed to read file");
                Response::not_found()
            }
        }
    }

    async fn save_file(&self, name: &str, body: &[u8]) -> Response {
        match self.files.write(name, body).await {
            Ok(()) => {
                debug!(name, len = body.len(), "saved file");
                Response::empty(StatusCode::Created)
            }
            Err(e) => {
                warn!(name, error = %e, "failed to write file");
                Response::internal_error()
            }
        }
    }
}

/// Echoes the path remainder back as plain text.
///
/// `Accept-Encoding: gzip` (exact value only) adds `Content-Encoding: gzip`
/// but the body is sent uncompressed.
fn echo(req: &Request, msg: &str) -> Response {
    let mut builder =
        ResponseBuilder::new(StatusCode::Ok).content("text/plain", msg.as_bytes().to_vec());

    if req.header("Accept-Encoding") == Some("gzip") {
        builder = builder.header("Content-Encoding", "gzip");
    }

    builder.build()
}

fn user_agent(req: &Request) -> Response {
    let ua = req.header("User-Agent").unwrap_or_default();
    ResponseBuilder::new(StatusCode::Ok)
        .content("text/plain", ua.as_bytes().to_vec())
        .build()
}
