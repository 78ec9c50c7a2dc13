//! # inkwell-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `inkwell-core`. It handles:
//!
//! - Connection pool management
//! - Schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model to entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inkwell_db::{create_pool, run_migrations, PgReactionRepository, PoolConfig};
//! use inkwell_core::{ReactionRepository, ReactionTarget};
//!
//! async fn example(blog_id: uuid::Uuid, user_id: uuid::Uuid) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::default()).await?;
//!     run_migrations(&pool).await?;
//!
//!     let reactions = PgReactionRepository::new(pool);
//!     let outcome = reactions.toggle(user_id, ReactionTarget::blog(blog_id)).await?;
//!     println!("{} likes", outcome.tally.likes);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod migrate;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use migrate::{run_migrations, EmbeddedMigrations};
pub use pool::{create_pool, PgPool, PoolConfig};
pub use repositories::{
    PgBlogRepository, PgCommentRepository, PgReactionRepository, PgUserRepository,
};
