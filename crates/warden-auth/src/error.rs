use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Fixed message carried by every permission denial.
pub const PERMISSION_DENIED_MESSAGE: &str = "insufficient permission to perform this action";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("insufficient permission to perform this action")]
    PermissionDenied,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Policy file
    #[error("policy file not found at {0}; run `warden init` first")]
    ConfigNotFound(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(String),

    #[error("TOML serialization error: {0}")]
    TomlSer(String),
}

impl AuthError {
    /// Unconditional denial for callers that already decided against the actor.
    /// Carries no detail about which grant was missing.
    pub fn permission_denied() -> Self {
        AuthError::PermissionDenied
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, AuthError::PermissionDenied)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuthError::PermissionDenied => {
                (StatusCode::FORBIDDEN, PERMISSION_DENIED_MESSAGE.to_string())
            }
            AuthError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AuthError::ConfigNotFound(_)
            | AuthError::Config(_)
            | AuthError::Io(_)
            | AuthError::TomlDe(_)
            | AuthError::TomlSer(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
