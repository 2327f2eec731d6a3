use crate::http::headers::HeaderMap;
use crate::http::request::{HttpRequest, Method, keep_alive_from};

const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Outcome of one parse attempt over a connection buffer.
#[derive(Debug)]
pub enum ParseResult {
    /// No complete frame yet; wait for more bytes.
    Incomplete,
    /// One frame, and how many leading bytes of the buffer it occupied.
    Complete { request: HttpRequest, consumed: usize },
}

/// Extracts the first complete request frame from `buf`.
///
/// The buffer is never modified. Calling this again on the same bytes gives
/// the same answer, so the caller can retry after every read.
pub fn parse_http_request(buf: &[u8]) -> ParseResult {
    let Some(headers_end) = find_headers_end(buf) else {
        return ParseResult::Incomplete;
    };

    let head = String::from_utf8_lossy(&buf[..headers_end]);
    let mut lines = head.split("\r\n");

    // Request line: anything past the third token is ignored
    let mut parts = lines.next().unwrap_or_default().split(' ');
    let method = Method::parse(parts.next().unwrap_or_default());
    let path = parts.next().unwrap_or_default().to_string();
    let version = parts.next().unwrap_or_default().to_string();

    let mut headers = HeaderMap::new();
    for line in lines {
        if let Some((key, value)) = line.split_once(':') {
            headers.insert(key, value);
        }
    }

    let body_start = headers_end + HEADER_TERMINATOR.len();
    // A length too large to address can never be satisfied by the buffer
    let Some(total) = body_start.checked_add(headers.content_length()) else {
        return ParseResult::Incomplete;
    };
    if buf.len() < total {
        return ParseResult::Incomplete;
    }

    let keep_alive = keep_alive_from(&headers);
    let request = HttpRequest {
        method,
        path,
        version,
        headers,
        body: buf[body_start..total].to_vec(),
        keep_alive,
    };

    ParseResult::Complete {
        request,
        consumed: total,
    }
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(HEADER_TERMINATOR.len())
        .position(|w| w == HEADER_TERMINATOR)
}
