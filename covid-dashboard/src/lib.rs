//! Server-side pieces of the COVID-19 dashboard.
//!
//! Split out of `main.rs` so integration tests can drive the router end
//! to end without binding a socket.

pub mod page;
pub mod server;
