//! # hemolink-api
//!
//! HTTP API server for the Hemolink blood-donation service:
//! - REST endpoints for auth, users, donor profiles, blood requests,
//!   donor pledges, and donations
//! - Optional bearer-token enforcement on the entity routes
//! - JSON error bodies and request tracing
//!
//! The [`routes::app`] router is reusable from tests; the `hemolinkd`
//! binary wires it to a real listener.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use routes::app;
pub use state::AppState;
