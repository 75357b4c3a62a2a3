use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Failures surfaced to clients. Every variant maps to a fixed status and a
/// fixed `{"error": <message>}` body; internal causes are logged, never leaked.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid user data")]
    InvalidUserData,

    #[error("Invalid recipe data")]
    InvalidRecipeData,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("401 Unauthorized")]
    Unauthorized,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidUserData | ApiError::InvalidRecipeData => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            ApiError::InvalidCredentials | ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            ApiError::Internal(cause) => {
                error!(error = %cause, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Why a domain value was rejected at construction time.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("username must be present and non-blank")]
    BlankUsername,

    #[error("instructions must be at least {minimum} characters")]
    InstructionsTooShort { minimum: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("error body is JSON")
    }

    #[tokio::test]
    async fn unauthorized_has_fixed_status_and_body() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["error"], "401 Unauthorized");
    }

    #[tokio::test]
    async fn validation_failures_are_422_with_generic_messages() {
        let response = ApiError::InvalidUserData.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["error"], "Invalid user data");

        let response = ApiError::InvalidRecipeData.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["error"], "Invalid recipe data");
    }

    #[tokio::test]
    async fn credential_failure_message_is_indistinguishable() {
        let response = ApiError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await["error"],
            "Invalid username or password"
        );
    }

    #[tokio::test]
    async fn internal_errors_never_leak_the_cause() {
        let response =
            ApiError::Internal(anyhow::anyhow!("connection refused at 10.0.0.7")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Internal server error");
    }
}
