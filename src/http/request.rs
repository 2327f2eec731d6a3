use std::fmt;

use crate::http::headers::HeaderMap;

/// HTTP request methods.
///
/// Tokens the server does not know are kept verbatim in `Other` so that an odd
/// request line still reaches the router (and ends up as a 404) instead of
/// failing the connection.
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
    /// Any other token, including an empty one
    Other(String),
}

impl Method {
    /// Parses an HTTP method token. Matching is case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use plainhttp::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("get"), Method::Other("get".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Other(token) => token,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request frame extracted from a connection buffer.
///
/// Produced by the parser and handed to the router once; nothing mutates it
/// afterwards.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The raw request target, not percent-decoded (e.g. "/echo/abc")
    pub path: String,
    /// Protocol token from the request line, empty when missing
    pub version: String,
    /// Request headers keyed by lower-cased name
    pub headers: HeaderMap,
    /// Exactly `Content-Length` bytes of body
    pub body: Vec<u8>,
    /// False when the client sent `Connection: close`
    pub keep_alive: bool,
}

/// Builder for constructing requests outside the parser.
pub struct RequestBuilder {
    method: Method,
    path: String,
    version: String,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: Method::GET,
            path: "/".to_string(),
            version: "HTTP/1.1".to_string(),
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key, value);
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> HttpRequest {
        let keep_alive = keep_alive_from(&self.headers);
        HttpRequest {
            method: self.method,
            path: self.path,
            version: self.version,
            headers: self.headers,
            body: self.body,
            keep_alive,
        }
    }
}

/// The connection stays open unless `Connection` says `close`, in any case.
pub(crate) fn keep_alive_from(headers: &HeaderMap) -> bool {
    !headers
        .get("connection")
        .is_some_and(|v| v.eq_ignore_ascii_case("close"))
}

impl HttpRequest {
    /// Retrieves a header value by name, ignoring case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }

    /// The declared `Content-Length`, or 0 when missing or not a number.
    pub fn content_length(&self) -> usize {
        self.headers.content_length()
    }

    /// Path split on `/`, skipping the leading empty piece.
    ///
    /// Returns `None` when the target does not start with a slash, which
    /// covers a request line with no path at all.
    pub fn segments(&self) -> Option<std::str::Split<'_, char>> {
        let rest = self.path.strip_prefix('/')?;
        Some(rest.split('/'))
    }
}
