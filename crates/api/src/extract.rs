//! Request extractors whose rejections use the JSON error envelope.
//!
//! Axum's stock `Json` and `Path` reject with plain-text bodies. These
//! wrappers route the rejection through [`AppError`] so malformed bodies
//! and ids come back as `400 {"error": ...}` like every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` with [`AppError`] rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` with [`AppError`] rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
