//! Entity to model mappers
//!
//! Conversions from database models into domain entities (inkwell-core).
//! Writes bind entity fields directly, so there are no insert structs.

mod blog;
mod comment;
mod reaction;
mod user;

pub use reaction::reaction_from_model;
