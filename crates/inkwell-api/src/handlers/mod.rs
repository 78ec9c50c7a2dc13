//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod accounts;
pub mod blogs;
pub mod comments;
pub mod health;
pub mod reactions;
