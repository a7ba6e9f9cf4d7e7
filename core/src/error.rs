use thiserror::Error;

/// The closed registry of client-facing error categories.
///
/// `name()` is the machine-readable code clients branch on — it is a wire
/// contract shared with the gateway and every frontend. Renaming an entry is
/// a breaking change for all of them; add new entries instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidParameter,
    Forbidden,
    ResourceNotFound,
    StateConflict,
    InternalServerError,
}

impl ErrorCode {
    /// Every registry entry, for table-driven checks.
    pub const ALL: [ErrorCode; 5] = [
        ErrorCode::InvalidParameter,
        ErrorCode::Forbidden,
        ErrorCode::ResourceNotFound,
        ErrorCode::StateConflict,
        ErrorCode::InternalServerError,
    ];

    /// HTTP status this category maps to. Kept as a bare `u16` so this crate
    /// stays off the HTTP stack; the API layer converts at the boundary.
    pub const fn http_status(self) -> u16 {
        match self {
            ErrorCode::InvalidParameter => 400,
            ErrorCode::Forbidden => 403,
            ErrorCode::ResourceNotFound => 404,
            ErrorCode::StateConflict => 409,
            ErrorCode::InternalServerError => 500,
        }
    }

    /// Stable machine-readable code.
    pub const fn name(self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::Forbidden => "ACCESS_DENIED",
            ErrorCode::ResourceNotFound => "RESOURCE_NOT_FOUND",
            ErrorCode::StateConflict => "STATE_CONFLICT",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Default human-readable message. Informational only — clients must
    /// branch on `name()`, never on this text.
    pub const fn message(self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => "파라미터가 올바르지 않습니다.",
            ErrorCode::Forbidden => "접근 권한이 없습니다.",
            ErrorCode::ResourceNotFound => "리소스를 찾을 수 없습니다.",
            ErrorCode::StateConflict => "상태 충돌 또는 잘못된 상태 전이가 발생했습니다.",
            ErrorCode::InternalServerError => "서버 내부 오류가 발생했습니다.",
        }
    }
}

/// Classified business failure.
///
/// Raised by domain logic at the point a rule is violated and propagated
/// unmodified (`?`) to the API boundary, which translates it into the
/// response for its `ErrorCode`. Carries nothing but the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", .code.message())]
pub struct DomainError {
    code: ErrorCode,
}

impl DomainError {
    pub const fn new(code: ErrorCode) -> Self {
        Self { code }
    }

    pub const fn code(self) -> ErrorCode {
        self.code
    }
}
