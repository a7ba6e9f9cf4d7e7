use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rushcrew_core::error::{DomainError, ErrorCode};
use rushcrew_core::response::{ApiResponse, ErrorResponse, ValidationError};

/// Every failure kind that can escape a handler, classified for translation.
///
/// Handlers raise `Domain` deliberately and let everything else propagate
/// unmodified; no intermediate layer may catch and rewrap. The single
/// `IntoResponse` impl below is the only place failures become HTTP.
#[derive(Debug)]
pub enum AppError {
    /// Business rule violation, classified at the raise site
    Domain(DomainError),
    /// Field-level validation failure (400, carries per-field details)
    Validation(Vec<ValidationError>),
    /// Authorization failure (403)
    AccessDenied { message: String },
    /// Invalid argument signalled by a lower layer (400)
    IllegalArgument(String),
    /// Conflicting or invalid state transition (409)
    IllegalState(String),
    /// Anything unclassified — an internal defect (500)
    Internal(String),
}

impl AppError {
    pub fn access_denied(message: impl Into<String>) -> Self {
        AppError::AccessDenied {
            message: message.into(),
        }
    }

    /// Wrap an unclassified failure. The detail is logged, never sent to the
    /// client.
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        AppError::Internal(cause.to_string())
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::Domain(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, body) = match self {
            AppError::Domain(err) => {
                let code = err.code();
                tracing::error!(code = code.name(), "business rule violation");
                (code, ErrorResponse::of(code))
            }
            AppError::Validation(errors) => {
                tracing::error!(fields = errors.len(), "request validation failed");
                let code = ErrorCode::InvalidParameter;
                (code, ErrorResponse::of_validation(code, errors))
            }
            AppError::AccessDenied { message } => {
                tracing::error!(%message, "access denied");
                let code = ErrorCode::Forbidden;
                (code, ErrorResponse::of(code))
            }
            AppError::IllegalArgument(message) => {
                tracing::error!(%message, "invalid argument");
                let code = ErrorCode::InvalidParameter;
                (code, ErrorResponse::of(code))
            }
            // Recoverable conflict, not a defect — warn, unlike the arms above
            AppError::IllegalState(message) => {
                tracing::warn!(%message, "conflicting or invalid state transition");
                let code = ErrorCode::StateConflict;
                (code, ErrorResponse::of(code))
            }
            // Unanticipated defect: log the full detail, return only the
            // generic body
            AppError::Internal(detail) => {
                tracing::error!(detail = %detail, "unhandled internal error");
                let code = ErrorCode::InternalServerError;
                (code, ErrorResponse::of(code))
            }
        };

        (status_of(code), Json(ApiResponse::error(body))).into_response()
    }
}

fn status_of(code: ErrorCode) -> StatusCode {
    StatusCode::from_u16(code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::extract::Path;
    use axum::http::Request;
    use axum::routing::{get, post};
    use rushcrew_core::role::UserRole;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn body_value(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn every_registry_entry_translates_to_its_own_status_and_code() {
        for code in ErrorCode::ALL {
            let response = AppError::from(DomainError::new(code)).into_response();
            assert_eq!(response.status().as_u16(), code.http_status());

            let body = body_value(response).await;
            assert_eq!(body["success"], json!(false));
            assert_eq!(body["error"]["statusCode"], json!(code.http_status()));
            assert_eq!(body["error"]["code"], json!(code.name()));
            assert_eq!(body["error"]["message"], json!(code.message()));
        }
    }

    #[tokio::test]
    async fn validation_failure_keeps_all_fields_in_order() {
        let response = AppError::Validation(vec![
            ValidationError::new("email", "must not be blank"),
            ValidationError::new("name", "size must be between 1 and 20"),
            ValidationError::new("role", "must not be null"),
        ])
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_value(response).await;
        assert_eq!(body["error"]["code"], json!("INVALID_PARAMETER"));
        assert_eq!(
            body["error"]["errors"],
            json!([
                {"field": "email", "message": "must not be blank"},
                {"field": "name", "message": "size must be between 1 and 20"},
                {"field": "role", "message": "must not be null"},
            ])
        );
    }

    #[tokio::test]
    async fn empty_validation_list_omits_the_errors_key() {
        let body = body_value(AppError::Validation(Vec::new()).into_response()).await;
        assert!(body["error"].get("errors").is_none());
    }

    #[tokio::test]
    async fn access_denied_maps_to_403_regardless_of_message() {
        for message in ["missing role", "seller endpoint called by user"] {
            let response = AppError::access_denied(message).into_response();
            assert_eq!(response.status(), StatusCode::FORBIDDEN);

            let body = body_value(response).await;
            assert_eq!(body["error"]["code"], json!("ACCESS_DENIED"));
        }
    }

    #[tokio::test]
    async fn illegal_argument_maps_to_400_invalid_parameter() {
        // The role parser is one real producer of this kind
        let err = "ADMIN"
            .parse::<UserRole>()
            .map_err(AppError::IllegalArgument)
            .unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_value(response).await;
        assert_eq!(body["error"]["code"], json!("INVALID_PARAMETER"));
    }

    #[tokio::test]
    async fn illegal_state_maps_to_409_state_conflict() {
        let response = AppError::IllegalState("이미 종료된 모집입니다".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_value(response).await;
        assert_eq!(body["error"]["statusCode"], json!(409));
        assert_eq!(body["error"]["code"], json!("STATE_CONFLICT"));
    }

    #[tokio::test]
    async fn unclassified_failure_maps_to_500_without_leaking_detail() {
        let cause = std::io::Error::other("connection pool exhausted");
        let response = AppError::internal(cause).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_value(response).await;
        assert_eq!(body["error"]["code"], json!("INTERNAL_SERVER_ERROR"));
        assert_eq!(
            body["error"]["message"],
            json!(ErrorCode::InternalServerError.message())
        );
        assert!(!body.to_string().contains("connection pool"));
    }

    #[tokio::test]
    async fn translation_is_idempotent_byte_for_byte() {
        let raise = || AppError::IllegalState("중복 신청".to_string());

        let first = to_bytes(raise().into_response().into_body(), usize::MAX)
            .await
            .unwrap();
        let second = to_bytes(raise().into_response().into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    // End-to-end: failures escaping real handlers through a router.

    async fn find_crew(Path(_crew_id): Path<i64>) -> Result<Json<ApiResponse<Value>>, AppError> {
        Err(DomainError::new(ErrorCode::ResourceNotFound).into())
    }

    async fn join_crew() -> Result<Json<ApiResponse<Value>>, AppError> {
        Err(AppError::Validation(vec![ValidationError::new(
            "email",
            "must not be blank",
        )]))
    }

    #[tokio::test]
    async fn resource_not_found_escaping_a_route_yields_the_contract_body() {
        let app = Router::new().route("/crews/{crew_id}", get(find_crew));

        let response = app
            .oneshot(Request::get("/crews/10").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_value(response).await;
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": {
                    "statusCode": 404,
                    "code": "RESOURCE_NOT_FOUND",
                    "message": "리소스를 찾을 수 없습니다.",
                },
            })
        );
    }

    #[tokio::test]
    async fn validation_failure_escaping_a_route_yields_field_details() {
        let app = Router::new().route("/crews/join", post(join_crew));

        let response = app
            .oneshot(Request::post("/crews/join").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_value(response).await;
        assert_eq!(body["error"]["statusCode"], json!(400));
        assert_eq!(body["error"]["code"], json!("INVALID_PARAMETER"));
        assert_eq!(
            body["error"]["errors"],
            json!([{"field": "email", "message": "must not be blank"}])
        );
    }
}
