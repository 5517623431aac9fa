//! # hemolink-client
//!
//! Rust client library for the Hemolink blood-donation API:
//! - Async typed client over every endpoint the server exposes
//! - Sign-up and profile form validation (the frontend's regex rules)
//! - Session state: the issued token and the signed-in user
//! - `{"error": ...}` bodies decoded into typed API errors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod session;
pub mod validate;

pub use client::{ensure_bearer, HemolinkClient};
pub use error::{Error, Result};
pub use session::Session;
