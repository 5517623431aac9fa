//! # hemolink-core
//!
//! Shared types for the Hemolink blood-donation coordination service.
//!
//! This crate provides the foundational types used across all Hemolink
//! crates. It has no internal Hemolink dependencies (dependency level 0).
//!
//! - [`error`]: Error types and Result alias
//! - [`model`]: Domain entities and the wire DTOs exchanged over the API

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod model;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use model::{BloodRequest, BloodType, Donation, DonorPledge, DonorProfile, Rhesus, User};
