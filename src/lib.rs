//! tinyhttp - a small HTTP/1.1 server written against raw TCP
//!
//! Parses requests, routes them to echo, user-agent and file handlers, and
//! writes responses back, one request per connection.

pub mod config;
pub mod http;
pub mod router;
pub mod server;
