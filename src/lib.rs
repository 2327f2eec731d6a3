//! plainhttp - Minimal HTTP/1.1 server
//!
//! Hand-written request framing, keep-alive and pipelining over a raw TCP
//! stream, with a small fixed route set.

pub mod config;
pub mod http;
pub mod router;
pub mod server;
