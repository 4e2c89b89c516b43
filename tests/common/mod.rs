#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use fake::Fake;
use fake::faker::name::en::Name;
use http_body_util::BodyExt;
use rollcall::router::init_router;
use rollcall::state::AppState;
use rollcall_config::{CorsConfig, JwtConfig, PasswordConfig};
use rollcall_db::MemoryStore;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_PASSWORD: &str = "secret123";

pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub token: String,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: None,
    }
}

/// A fresh app over an empty in-memory store.
pub fn setup_test_app() -> Router {
    let state = AppState::new(
        Arc::new(MemoryStore::new()),
        test_jwt_config(),
        CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        PasswordConfig { bcrypt_cost: 4 },
    );
    init_router(state)
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

pub fn generate_name() -> String {
    Name().fake()
}

/// Sends one request and returns the status with the parsed JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    read_json(response).await
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await
}

/// Signs up a user with the given role and logs them in.
pub async fn create_test_user(app: &Router, role: &str) -> TestUser {
    let name = generate_name();
    let email = generate_unique_email();

    let (status, body) = send(
        app,
        "POST",
        "/auth/signup",
        None,
        Some(json!({
            "name": name,
            "email": email,
            "password": TEST_PASSWORD,
            "role": role
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "signup failed: {body}");

    let (status, login_body) = login(app, &email, TEST_PASSWORD).await;
    assert_eq!(status, StatusCode::OK, "login failed: {login_body}");

    TestUser {
        id: body["data"]["id"].as_str().unwrap().parse().unwrap(),
        name,
        email,
        token: login_body["data"]["token"].as_str().unwrap().to_string(),
    }
}

/// Creates a class as `teacher` and returns its id.
pub async fn create_class(app: &Router, teacher: &TestUser, class_name: &str) -> Uuid {
    let (status, body) = send(
        app,
        "POST",
        "/class",
        Some(&teacher.token),
        Some(json!({ "className": class_name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create class failed: {body}");
    body["data"]["id"].as_str().unwrap().parse().unwrap()
}

pub async fn add_student(
    app: &Router,
    teacher: &TestUser,
    class_id: Uuid,
    student_id: Uuid,
) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        &format!("/class/{}/add-student", class_id),
        Some(&teacher.token),
        Some(json!({ "studentId": student_id })),
    )
    .await
}
