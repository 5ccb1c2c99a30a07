//! HTTP/1.1 wire handling.
//!
//! The server speaks a deliberately small subset of HTTP/1.1: one request per
//! connection, bodies sized only by `Content-Length`, no chunked encoding.
//!
//! # Architecture
//!
//! - **`parser`**: CRLF line reader and request parser over any buffered async reader
//! - **`request`**: request types (`StartLine`, `Method`, `HeaderMap`, `Request`)
//! - **`response`**: status codes and the response model with a builder
//! - **`writer`**: serializes responses to bytes and writes them out
//! - **`connection`**: drives one parse → route → write → close cycle
//! - **`error`**: parse failures
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Parse request from the stream
//!        └──────┬──────┘
//!               │ Request parsed          (parse error → Closed, nothing written)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route to a response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← Stream shut down
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tinyhttp::http::connection::Connection;
//! use tinyhttp::router::{FileStore, Router};
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:4221").await?;
//!     let router = Arc::new(Router::new(FileStore::new("/tmp")));
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let router = Arc::clone(&router);
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, router);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod error;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
