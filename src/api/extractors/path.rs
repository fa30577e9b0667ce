//! Path parameter extractor with API-style rejections.

use axum::extract::FromRequestParts;
use axum::extract::rejection::PathRejection;

use crate::error::AppError;

/// `axum::extract::Path` whose rejection is an [`AppError::BadRequest`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
