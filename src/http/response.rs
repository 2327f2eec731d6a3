/// HTTP status codes the server emits.
///
/// - `Ok` (200): Request successful
/// - `Created` (201): File written
/// - `NotFound` (404): Unknown route, unsupported method or missing file
/// - `InternalServerError` (500): Filesystem failure while serving a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use plainhttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use plainhttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Created.reason_phrase(), "Created");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// A complete HTTP response ready to be serialized.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Headers in the order they go on the wire
    pub headers: Vec<(String, String)>,
    /// Response body as bytes, already encoded if compression applies
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use plainhttp::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/plain")
///     .body(b"abc".to_vec())
///     .build();
/// assert_eq!(response.header("content-length"), Some("3"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Adds a header, or replaces the value of one already set under the
    /// same name (compared case-insensitively) while keeping its position.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, key.into(), value.into());
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the final Response.
    ///
    /// `Content-Length` is always the byte length of the final body; any
    /// value set earlier is overwritten.
    pub fn build(mut self) -> Response {
        self.headers
            .retain(|(k, _)| !k.eq_ignore_ascii_case("Content-Length"));
        self.headers
            .push(("Content-Length".to_string(), self.body.len().to_string()));

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

fn set_header(headers: &mut Vec<(String, String)>, key: String, value: String) {
    match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&key)) {
        Some(slot) => slot.1 = value,
        None => headers.push((key, value)),
    }
}

impl Response {
    /// 200 OK with an empty body.
    pub fn ok() -> Self {
        ResponseBuilder::new(StatusCode::Ok).build()
    }

    /// 200 OK with a `text/plain` body.
    pub fn text(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "text/plain")
            .body(body)
            .build()
    }

    /// 201 Created with an empty body.
    pub fn created() -> Self {
        ResponseBuilder::new(StatusCode::Created).build()
    }

    /// 404 Not Found with an empty body.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound).build()
    }

    /// 500 Internal Server Error with an empty body.
    pub fn internal_error() -> Self {
        ResponseBuilder::new(StatusCode::InternalServerError).build()
    }

    /// First header with the given name, ignoring case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
