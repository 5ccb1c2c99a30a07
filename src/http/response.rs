use crate::http::request::HeaderMap;

/// Protocol version written on every status line.
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): Request successful
/// - `Created` (201): Resource created successfully
/// - `NotFound` (404): Resource not found
/// - `MethodNotAllowed` (405): HTTP method not supported on this route
/// - `InternalServerError` (500): Server error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyhttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyhttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Headers are written exactly as set. Nothing is derived from the body, so
/// whoever builds a response with a body also sets `Content-Length`.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers as key-value pairs
    pub headers: HeaderMap,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use tinyhttp::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/plain")
///     .body(b"hi".to_vec())
///     .build();
/// assert_eq!(response.status_line(), "HTTP/1.1 200 OK");
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    /// Adds or replaces a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Sets the body along with matching `Content-Type` and `Content-Length`.
    pub fn content(self, content_type: &str, body: Vec<u8>) -> Self {
        let len = body.len();
        self.header("Content-Type", content_type)
            .header("Content-Length", len.to_string())
            .body(body)
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// A response with the given status, no headers and an empty body.
    pub fn empty(status: StatusCode) -> Self {
        ResponseBuilder::new(status).build()
    }

    /// Creates an empty 200 OK response.
    pub fn ok() -> Self {
        Self::empty(StatusCode::Ok)
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        Self::empty(StatusCode::NotFound)
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        Self::empty(StatusCode::InternalServerError)
    }

    /// The first line of the response without its CRLF, e.g.
    /// `HTTP/1.1 404 Not Found`.
    pub fn status_line(&self) -> String {
        format!(
            "{} {} {}",
            HTTP_VERSION,
            self.status.as_u16(),
            self.status.reason_phrase()
        )
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }
}
