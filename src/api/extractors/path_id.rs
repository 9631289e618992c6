//! Integer id path segment extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::AppError;

/// Extracts the `{id}` path segment as an `i32`.
///
/// A segment that is not an integer is a validation error rendered in
/// the usual JSON error body. An integer outside the id column's range
/// can never name a stored user, so it is reported as not found.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        parse_id(&segment).map(PathId)
    }
}

fn parse_id(segment: &str) -> Result<i32, AppError> {
    if let Ok(id) = segment.parse::<i32>() {
        return Ok(id);
    }

    let digits = segment.strip_prefix(['-', '+']).unwrap_or(segment);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::not_found("User"));
    }

    Err(AppError::validation(format!(
        "Invalid id: {segment:?} is not an integer"
    )))
}
