//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};

/// A response as seen by a client.
#[derive(Debug)]
pub struct RawResponse {
    pub status_line: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Splits responses off a client stream using `Content-Length`.
#[derive(Default)]
pub struct ResponseReader {
    buf: Vec<u8>,
}

impl ResponseReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next response, or `None` once the server closed the stream.
    pub async fn next<S: AsyncRead + Unpin>(&mut self, stream: &mut S) -> Option<RawResponse> {
        tokio::time::timeout(Duration::from_secs(5), self.next_inner(stream))
            .await
            .expect("timed out waiting for a response")
    }

    async fn next_inner<S: AsyncRead + Unpin>(&mut self, stream: &mut S) -> Option<RawResponse> {
        loop {
            if let Some(resp) = self.try_split() {
                return Some(resp);
            }
            let mut chunk = [0u8; 1024];
            let n = stream.read(&mut chunk).await.ok()?;
            if n == 0 {
                assert!(self.buf.is_empty(), "stream closed mid-response");
                return None;
            }
            self.buf.extend_from_slice(&chunk[..n]);
        }
    }

    fn try_split(&mut self) -> Option<RawResponse> {
        let head_end = self.buf.windows(4).position(|w| w == b"\r\n\r\n")?;
        let head = String::from_utf8(self.buf[..head_end].to_vec()).unwrap();
        let mut lines = head.split("\r\n");
        let status_line = lines.next().unwrap().to_string();
        let headers: Vec<(String, String)> = lines
            .map(|l| {
                let (k, v) = l.split_once(": ").unwrap();
                (k.to_string(), v.to_string())
            })
            .collect();

        let length: usize = headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
            .map(|(_, v)| v.parse().unwrap())
            .expect("every response carries Content-Length");

        let total = head_end + 4 + length;
        if self.buf.len() < total {
            return None;
        }
        let body = self.buf[head_end + 4..total].to_vec();
        self.buf.drain(..total);

        Some(RawResponse {
            status_line,
            headers,
            body,
        })
    }
}

/// A fresh, empty directory under the system temp dir.
pub fn temp_dir(tag: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!(
        "plainhttp-{}-{}-{}",
        tag,
        std::process::id(),
        n
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn gunzip(bytes: &[u8]) -> Vec<u8> {
    use std::io::Read;

    let mut out = Vec::new();
    flate2::read::GzDecoder::new(bytes)
        .read_to_end(&mut out)
        .unwrap();
    out
}
