//! Integration test utilities for the Inkwell backend
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API over a real socket and a real PostgreSQL database.

pub mod helpers;

pub use helpers::*;
pub use fixtures::*;
