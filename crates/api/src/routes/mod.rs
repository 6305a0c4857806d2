//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth::auth_middleware};

pub mod admin;
pub mod health;

/// Creates the API router with protected routes that need state for middleware.
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .merge(admin::routes())
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .merge(health::routes())
        .merge(protected_routes)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header::AUTHORIZATION},
    };
    use http_body_util::BodyExt;
    use sea_orm::DatabaseConnection;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::{AppState, create_router};
    use lisan_core::admin::AnalyticsSummarizer;
    use lisan_shared::{JwtConfig, JwtService};

    const SECRET: &str = "router-test-secret";

    fn state() -> AppState {
        AppState {
            db: Arc::new(DatabaseConnection::Disconnected),
            jwt_service: Arc::new(JwtService::new(JwtConfig {
                secret: SECRET.to_string(),
                access_token_expires_minutes: 15,
            })),
            analytics: Arc::new(AnalyticsSummarizer::default()),
        }
    }

    fn token(expires_minutes: i64) -> String {
        JwtService::new(JwtConfig {
            secret: SECRET.to_string(),
            access_token_expires_minutes: expires_minutes,
        })
        .generate_access_token(Uuid::new_v4(), Some("admin@example.org"))
        .unwrap()
    }

    async fn send(uri: &str, authorization: Option<String>) -> (StatusCode, serde_json::Value) {
        let mut request = Request::builder().uri(uri);
        if let Some(value) = authorization {
            request = request.header(AUTHORIZATION, value);
        }
        let response = create_router(state())
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let (status, body) = send("/api/v1/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_reports_unreachable_database() {
        let (status, body) = send("/api/v1/health/ready", None).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unavailable");
    }

    #[tokio::test]
    async fn test_missing_token() {
        let (status, body) = send("/api/v1/admin/context", None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "missing_token");
    }

    #[tokio::test]
    async fn test_invalid_token() {
        let (status, body) =
            send("/api/v1/admin/employees", Some("Bearer not-a-jwt".to_string())).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "invalid_token");
    }

    #[tokio::test]
    async fn test_expired_token() {
        let (status, body) =
            send("/api/v1/admin/analytics", Some(format!("Bearer {}", token(-10)))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "token_expired");
    }

    #[tokio::test]
    async fn test_store_failure_is_a_data_access_error() {
        let (status, body) =
            send("/api/v1/admin/context", Some(format!("Bearer {}", token(15)))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "data_access_error");
    }

    #[tokio::test]
    async fn test_bad_role_is_rejected_before_lookup() {
        let (status, body) = send(
            "/api/v1/admin/employees?role=imam",
            Some(format!("Bearer {}", token(15))),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
    }
}
