use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};

/// Header the gateway sets with the authenticated account id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Audit identity for the current request, if the gateway supplied one.
///
/// Resolution never fails the request: a missing, blank, or unparseable
/// header just means no auditor. Parse failures are logged so a
/// misconfigured gateway is visible in operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentAuditor(pub Option<i64>);

impl<S> FromRequestParts<S> for CurrentAuditor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentAuditor(resolve_user_id(&parts.headers)))
    }
}

/// Read and parse the gateway user id header.
pub fn resolve_user_id(headers: &HeaderMap) -> Option<i64> {
    let raw = headers.get(USER_ID_HEADER)?.to_str().ok()?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::warn!(value = raw, "invalid user id header");
            None
        }
    }
}
