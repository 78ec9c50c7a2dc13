//! # inkwell-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, BlogService, CommentService, ReactionService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
