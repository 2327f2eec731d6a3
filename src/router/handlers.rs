//! Endpoint implementations.
//!
//! Handlers always produce a response. Failures that only concern the
//! current request (a missing file, a refused write) become status codes.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::http::request::{HttpRequest, Method};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::router::encoding;

pub fn root(_req: &HttpRequest) -> Response {
    Response::ok()
}

/// Echoes the second path segment, gzip-compressed when the client asks.
pub fn echo(req: &HttpRequest) -> Response {
    let text = req
        .segments()
        .and_then(|mut s| s.nth(1))
        .unwrap_or_default();

    if !encoding::accepts_gzip(req) {
        return Response::text(text);
    }

    match encoding::gzip(text.as_bytes()) {
        Ok(compressed) => ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "text/plain")
            .header("Content-Encoding", encoding::GZIP)
            .body(compressed)
            .build(),
        Err(e) => {
            warn!(error = %e, "gzip encoding failed, sending identity body");
            Response::text(text)
        }
    }
}

pub fn user_agent(req: &HttpRequest) -> Response {
    Response::text(req.header("user-agent").unwrap_or_default())
}

/// Serves `GET` and stores `POST` under `directory`.
///
/// The file name is everything after `/files/`. `..` components are not
/// rejected.
pub async fn files(req: &HttpRequest, directory: Option<&Path>) -> Response {
    let Some(directory) = directory else {
        return Response::not_found();
    };

    let name = req
        .path
        .strip_prefix("/files/")
        .unwrap_or_default();
    let Some(target) = file_target(directory, name) else {
        return Response::not_found();
    };

    match req.method {
        Method::GET => read_file(&target).await,
        Method::POST => write_file(&target, &req.body).await,
        _ => Response::not_found(),
    }
}

/// Appends the non-empty segments of `name` to `directory`, so a leading or
/// doubled slash still lands inside it. `None` when no segment remains.
fn file_target(directory: &Path, name: &str) -> Option<PathBuf> {
    let mut segments = name.split('/').filter(|s| !s.is_empty()).peekable();
    segments.peek()?;

    let mut target = directory.to_path_buf();
    target.extend(segments);
    Some(target)
}

async fn read_file(target: &Path) -> Response {
    match tokio::fs::metadata(target).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Response::not_found(),
        Err(e) if e.kind() == ErrorKind::NotFound => return Response::not_found(),
        Err(e) => {
            warn!(path = %target.display(), error = %e, "stat failed");
            return Response::internal_error();
        }
    }

    match tokio::fs::read(target).await {
        Ok(contents) => ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "application/octet-stream")
            .body(contents)
            .build(),
        Err(e) if e.kind() == ErrorKind::NotFound => Response::not_found(),
        Err(e) => {
            warn!(path = %target.display(), error = %e, "read failed");
            Response::internal_error()
        }
    }
}

async fn write_file(target: &Path, body: &[u8]) -> Response {
    match tokio::fs::write(target, body).await {
        Ok(()) => Response::created(),
        Err(e) => {
            warn!(path = %target.display(), error = %e, "write failed");
            Response::internal_error()
        }
    }
}
