//! HTTP/1.1 protocol engine.
//!
//! Framing, parsing and serialization are done by hand over a raw byte
//! stream; no protocol library is involved.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection loop that owns the read buffer
//! - **`parser`**: extracts one request frame from the front of a buffer
//! - **`headers`**: case-insensitive, last-write-wins header map
//! - **`request`**: request representation and builder
//! - **`response`**: status codes and response builder
//! - **`writer`**: serializes responses onto the transport
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!   ┌───▶│   Reading   │ ← parse buffered bytes, read more if incomplete
//!   │    └──────┬──────┘
//!   │           │ Frame complete (prefix removed from buffer)
//!   │           ▼
//!   │    ┌──────────────────┐
//!   │    │   Dispatching    │ ← route, then write the response
//!   │    └──────┬───────────┘
//!   │           │
//!   └───────────┤ Keep-Alive
//!               └─ Connection: close / EOF / I/O error → Closed
//! ```
//!
//! Returning to `Reading` parses what is already buffered before touching the
//! socket again, so several pipelined requests that arrived in one read are
//! answered back to back.

pub mod connection;
pub mod headers;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
