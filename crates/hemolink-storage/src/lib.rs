//! # hemolink-storage
//!
//! SQLite persistence for the Hemolink blood-donation service:
//! - Pooled connection handling with foreign keys enforced
//! - Versioned, embedded schema migrations
//! - One repository per entity (users, donor profiles, blood requests,
//!   donor pledges, donations)
//!
//! Reads that the API serves with embedded related entities (a profile's
//! user, a pledge's donor and request) are joined here, so handlers never
//! issue follow-up queries.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod db;
pub mod error;
pub mod repo;

pub use db::{apply_migrations, connect};
pub use error::{Error, Result};
pub use repo::{BloodRequestRepo, DonationRepo, DonorPledgeRepo, DonorProfileRepo, UserRepo};
