#![allow(dead_code)]

use actix_web::{body::MessageBody, dev::ServiceResponse, http::StatusCode, test};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use taskkeep::auth::{AuthService, LoginResponse, PasswordHasher, TokenService};
use taskkeep::store::Store;

pub const TEST_SECRET: &str = "integration_test_secret";

/// Shared state for one test app: an in-memory store, a low bcrypt cost and a
/// one-hour token lifetime.
pub fn test_state() -> (Store, AuthService) {
    let store = Store::in_memory();
    let tokens = Arc::new(TokenService::new(TEST_SECRET, Duration::from_secs(3600)));
    let auth = AuthService::new(store.clone(), PasswordHasher::new(4), tokens);
    (store, auth)
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

pub async fn register_user(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    >,
    email: &str,
    password: &str,
) -> StatusCode {
    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    test::call_service(app, req).await.status()
}

/// Registers then logs in, returning the bearer token.
pub async fn register_and_login(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    >,
    email: &str,
    password: &str,
) -> Result<String, String> {
    let status = register_user(app, email, password).await;
    if status != StatusCode::CREATED {
        return Err(format!("Failed to register {}. Status: {}", email, status));
    }

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    if status != StatusCode::OK {
        return Err(format!(
            "Failed to log in {}. Status: {}. Body: {}",
            email,
            status,
            String::from_utf8_lossy(&body)
        ));
    }

    let login: LoginResponse =
        serde_json::from_slice(&body).map_err(|e| format!("Bad login response: {}", e))?;
    Ok(login.token)
}
