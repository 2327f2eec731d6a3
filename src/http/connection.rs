use std::sync::Arc;

use bytes::{Buf, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::http::parser::{ParseResult, parse_http_request};
use crate::http::request::HttpRequest;
use crate::http::writer::ResponseWriter;
use crate::router::Router;

/// Drives one client connection: reads bytes, cuts them into request frames,
/// and answers each frame in order.
///
/// The buffer belongs to this connection alone. It only grows by appending
/// what was read and only shrinks by dropping the prefix a parsed frame
/// occupied.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    router: Arc<Router>,
}

pub enum ConnectionState {
    Reading,
    Dispatching(HttpRequest),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
            router,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(req) => ConnectionState::Dispatching(req),
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Dispatching(req) => {
                    let response = self.router.dispatch(&req).await;
                    debug!(
                        method = %req.method,
                        path = %req.path,
                        status = response.status.as_u16(),
                        bytes = response.body.len(),
                        "request handled"
                    );

                    let mut writer = ResponseWriter::new(&response);
                    writer.write_to_stream(&mut self.stream).await?;

                    self.state = if req.keep_alive {
                        // Anything already buffered is parsed before reading again
                        ConnectionState::Reading
                    } else {
                        ConnectionState::Closed
                    };
                }

                ConnectionState::Closed => break,
            }
        }

        // Bytes left over after `Connection: close` are dropped with the buffer
        self.buffer.clear();
        let _ = self.stream.shutdown().await;
        Ok(())
    }

    /// Returns the next complete request, reading only when the buffer does
    /// not already hold one. `None` means the peer closed the connection.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<HttpRequest>> {
        loop {
            if let ParseResult::Complete { request, consumed } = parse_http_request(&self.buffer) {
                self.buffer.advance(consumed);
                return Ok(Some(request));
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if !self.buffer.is_empty() {
                    debug!(pending = self.buffer.len(), "peer closed mid-frame");
                }
                return Ok(None);
            }
        }
    }
}
