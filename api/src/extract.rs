//! Extractors that turn axum rejections into the envelope error contract.
//!
//! `AppJson<T>` replaces `axum::Json<T>` in handler signatures: a body that
//! fails to bind produces the standard `INVALID_PARAMETER` envelope with a
//! field entry, instead of axum's plain-text rejection.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

use crate::error::AppError;
use rushcrew_core::response::ValidationError;

pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(map_json_rejection(rejection)),
        }
    }
}

/// Convert a bind failure into the validation kind, recovering the offending
/// field from serde's message when it names one.
pub fn map_json_rejection(rejection: JsonRejection) -> AppError {
    let detail = rejection.body_text();
    let field = serde_field_hint(&detail).unwrap_or_else(|| "body".to_string());
    AppError::Validation(vec![ValidationError::new(field, detail)])
}

/// Serde names the field in backticks for "missing field `x`" and
/// "unknown field `x`" errors; other shapes carry no field.
fn serde_field_hint(msg: &str) -> Option<String> {
    for marker in ["missing field `", "unknown field `"] {
        if let Some(start) = msg.find(marker) {
            let rest = &msg[start + marker.len()..];
            if let Some(end) = rest.find('`') {
                return Some(rest[..end].to_string());
            }
        }
    }
    None
}
