//! Response body compression negotiated from `Accept-Encoding`.

use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::http::request::HttpRequest;

pub const GZIP: &str = "gzip";

/// True when `Accept-Encoding` lists the exact token `gzip`.
///
/// Tokens are trimmed but not case-folded, and quality parameters are not
/// interpreted: `gzip;q=0.5` does not match.
pub fn accepts_gzip(req: &HttpRequest) -> bool {
    req.header("accept-encoding")
        .is_some_and(|v| v.split(',').any(|token| token.trim() == GZIP))
}

pub fn gzip(body: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(body)?;
    encoder.finish()
}
