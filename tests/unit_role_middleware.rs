mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use common::{TEST_SECRET, read_json};
use rollcall::require_roles;
use rollcall::state::AppState;
use rollcall_auth::{Identity, issue_token};
use rollcall_config::{CorsConfig, JwtConfig, PasswordConfig};
use rollcall_db::MemoryStore;
use rollcall_models::Role;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

require_roles!(RequireTeacherOnly, [Role::Teacher]);

async fn teacher_only(RequireTeacherOnly(auth_user): RequireTeacherOnly) -> String {
    auth_user.user_id().to_string()
}

fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: Some(3600),
    }
}

fn app() -> Router {
    let state = AppState::new(
        Arc::new(MemoryStore::new()),
        jwt_config(),
        CorsConfig {
            allowed_origins: vec![],
        },
        PasswordConfig { bcrypt_cost: 4 },
    );
    Router::new()
        .route("/guarded", get(teacher_only))
        .with_state(state)
}

async fn call(authorization: Option<String>) -> axum::response::Response {
    let mut request = axum::http::Request::builder().uri("/guarded");
    if let Some(value) = authorization {
        request = request.header("authorization", value);
    }
    app()
        .oneshot(request.body(axum::body::Body::empty()).unwrap())
        .await
        .unwrap()
}

fn token_for(role: Role) -> (Uuid, String) {
    let user_id = Uuid::new_v4();
    let token = issue_token(&Identity::new(user_id, role), &jwt_config()).unwrap();
    (user_id, token)
}

#[tokio::test]
async fn test_allowed_role_reaches_handler() {
    let (user_id, token) = token_for(Role::Teacher);

    let response = call(Some(format!("Bearer {}", token))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    assert_eq!(bytes, user_id.to_string().as_bytes());
}

#[tokio::test]
async fn test_disallowed_role_is_forbidden() {
    let (_, token) = token_for(Role::Student);

    let (status, body) = read_json(call(Some(format!("Bearer {}", token))).await).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_missing_header_is_unauthorized() {
    let (status, _) = read_json(call(None).await).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_bearer_scheme_is_unauthorized() {
    let (_, token) = token_for(Role::Teacher);

    let (status, _) = read_json(call(Some(format!("Basic {}", token))).await).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_without_expiry_is_rejected_when_expiry_required() {
    let non_expiring = JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: None,
    };
    let token = issue_token(&Identity::new(Uuid::new_v4(), Role::Teacher), &non_expiring).unwrap();

    let (status, _) = read_json(call(Some(format!("Bearer {}", token))).await).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
