//! Body and path extractors whose rejections render as [`AppError`].
//!
//! axum's own `Json` and `Path` reject with plain-text bodies; these wrappers
//! route the same failures through the `{error, code}` envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` with malformed or mistyped bodies reported as 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` with unparseable segments reported as 404.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
