//! TCP front end.

pub mod listener;
