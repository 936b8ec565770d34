//! Request extractors whose rejections go through [`AppError`].

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor that reports decode failures as structured
/// [`AppError`] responses instead of axum's plain-text rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
