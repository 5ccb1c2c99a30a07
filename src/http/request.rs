use std::collections::HashMap;
use std::fmt;

/// Header name to value. Names are kept exactly as received and a repeated
/// name overwrites the earlier value.
pub type HeaderMap = HashMap<String, String>;

/// Parses `Content-Length` from a header map.
///
/// `None` when the header is missing or not an unsigned integer, which means
/// the request carries no body.
pub fn content_length(headers: &HeaderMap) -> Option<usize> {
    headers.get("Content-Length").and_then(|v| v.parse().ok())
}

/// HTTP request methods.
///
/// The parser accepts any token in method position. Well-known verbs get
/// their own variant and everything else is kept verbatim in `Extension`,
/// leaving it to the router to decide what is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// Any other token, case preserved
    Extension(String),
}

impl Method {
    /// Returns the method exactly as it appeared on the request line.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyhttp::http::request::Method;
    /// assert_eq!(Method::from("GET").as_str(), "GET");
    /// assert_eq!(Method::from("get").as_str(), "get");
    /// ```
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Extension(other) => other.as_str(),
        }
    }
}

impl From<&str> for Method {
    /// Method tokens are case-sensitive, so `get` is an extension method.
    fn from(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            other => Method::Extension(other.to_string()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three tokens of a request's first line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartLine {
    pub method: Method,
    /// Request target as sent, e.g. `/files/a.txt`. Not decoded.
    pub path: String,
    /// Protocol version as sent, typically `HTTP/1.1`. Not validated.
    pub version: String,
}

/// Represents a parsed HTTP request from a client.
///
/// Built once per connection by the parser and only read afterwards.
#[derive(Debug, Clone)]
pub struct Request {
    pub start_line: StartLine,
    /// Request headers as key-value pairs
    pub headers: HeaderMap,
    /// Present only when `Content-Length` was set to a number.
    pub body: Option<Vec<u8>>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    version: Option<String>,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            path: None,
            version: None,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn method(mut self, method: impl Into<Method>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            start_line: StartLine {
                method: self.method.ok_or("method missing")?,
                path: self.path.ok_or("path missing")?,
                version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            },
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    pub fn method(&self) -> &Method {
        &self.start_line.method
    }

    pub fn path(&self) -> &str {
        &self.start_line.path
    }

    pub fn version(&self) -> &str {
        &self.start_line.version
    }

    /// Retrieves a header value by its exact, case-sensitive name.
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the header value if present, `None` otherwise.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    pub fn content_length(&self) -> Option<usize> {
        content_length(&self.headers)
    }

    /// The request body, or an empty slice when none was sent.
    pub fn body(&self) -> &[u8] {
        self.body.as_deref().unwrap_or_default()
    }
}
