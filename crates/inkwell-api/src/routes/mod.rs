//! Route definitions
//!
//! Paths keep their trailing slash; request bodies carry the target ids.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{accounts, blogs, comments, health, reactions};
use crate::state::AppState;

/// Create the API router (health routes are mounted separately so they skip rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(account_routes())
        .merge(blog_routes())
        .merge(comment_routes())
        .merge(reaction_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Registration, login and token refresh
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/accounts/register/", post(accounts::register))
        .route("/accounts/login/", post(accounts::login))
        .route("/accounts/token/refresh/", post(accounts::refresh_token))
}

/// Blog routes
fn blog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/blogs/",
            get(blogs::list_mine)
                .post(blogs::create)
                .patch(blogs::update)
                .delete(blogs::delete),
        )
        .route("/publicblogs/", get(blogs::list_public))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/blogs/comments/",
            get(comments::list_mine)
                .post(comments::create)
                .patch(comments::update)
                .delete(comments::delete),
        )
        .route("/comments/", get(comments::list_all))
}

/// Reaction toggles
fn reaction_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs/like/", post(reactions::toggle_blog))
        .route("/comments/like/", post(reactions::toggle_comment))
}
