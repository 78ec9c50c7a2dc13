//! Listing query extractor
//!
//! Extracts `page`, `page_size` and `search` from the query string. Bounds
//! are applied by the service against the configured limits.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use inkwell_service::dto::BlogListQuery;

use crate::response::ApiError;

/// Parsed listing parameters
#[derive(Debug, Clone, Default)]
pub struct ListQuery(pub BlogListQuery);

#[async_trait]
impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<BlogListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        if params.page == Some(0) {
            return Err(ApiError::invalid_query("page must be at least 1"));
        }

        Ok(ListQuery(params))
    }
}
