//! JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, warn};

use lisan_core::admin::AdminError;
use lisan_shared::AppError;

/// Handler error rendered as `{ "error", "message" }`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<AdminError> for ApiError {
    fn from(err: AdminError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error_response(&self.0)
    }
}

/// Renders an application error with its status code.
///
/// Internal failure details are logged and replaced with a generic message.
pub fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let message = if err.is_internal() {
        error!(error = %err, "Request failed");
        "An internal error occurred".to_string()
    } else {
        if matches!(err, AppError::Forbidden(_)) {
            warn!(error = %err, "Request rejected");
        }
        err.to_string()
    };

    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": message
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[rstest]
    #[case(AppError::Forbidden("mosque scope lacks ManageBilling".into()), 403, "forbidden")]
    #[case(AppError::NotFound("user".into()), 404, "not_found")]
    #[case(AppError::BusinessRule("admin has no organization".into()), 422, "invalid_configuration")]
    #[case(AppError::Validation("unknown role: imam".into()), 400, "validation_error")]
    #[tokio::test]
    async fn test_error_response_shape(
        #[case] err: AppError,
        #[case] status: u16,
        #[case] code: &str,
    ) {
        let expected_message = err.to_string();
        let response = error_response(&err);

        assert_eq!(response.status().as_u16(), status);
        let body = body_json(response).await;
        assert_eq!(body["error"], code);
        assert_eq!(body["message"], expected_message);
    }

    #[tokio::test]
    async fn test_database_details_are_hidden() {
        let response =
            ApiError::from(AdminError::data_access("relation users does not exist")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "data_access_error");
        assert_eq!(body["message"], "An internal error occurred");
    }
}
