//! Request extractors whose rejections render as `AppError`.
//!
//! Axum's stock `Json` and `Query` reject malformed input with their own
//! status codes and plain-text bodies; these wrappers route every rejection
//! through `AppError::Validation` so clients always see the error envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// URL query string.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
