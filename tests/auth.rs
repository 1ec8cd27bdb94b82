mod common;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use taskkeep::auth::LoginResponse;
use taskkeep::models::MessageResponse;
use taskkeep::routes;

use common::{register_user, test_state};

#[test_log::test(actix_rt::test)]
async fn test_register_and_login_flow() {
    let (store, auth) = test_state();
    let tokens = auth.tokens();
    let app = test::init_service(App::new().configure(routes::config(store.clone(), auth))).await;

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({ "email": "alice@example.com", "password": "secret123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: MessageResponse = test::read_body_json(resp).await;
    assert_eq!(body.message, "User registered successfully");

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "alice@example.com", "password": "secret123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let login: LoginResponse = test::read_body_json(resp).await;

    // The token names the account that was just created.
    let user = store.find_user_by_email("alice@example.com").await.unwrap();
    let claims = tokens.verify(&login.token).unwrap();
    assert_eq!(claims.sub, user.id);
}

#[actix_rt::test]
async fn test_register_duplicate_email() {
    let (store, auth) = test_state();
    let app = test::init_service(App::new().configure(routes::config(store.clone(), auth))).await;

    assert_eq!(
        register_user(&app, "dup@example.com", "password123").await,
        StatusCode::CREATED
    );
    let first = store.find_user_by_email("dup@example.com").await.unwrap();

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({ "email": "dup@example.com", "password": "different-password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "User already exists" }));

    // The first record is left as it was.
    let after = store.find_user_by_email("dup@example.com").await.unwrap();
    assert_eq!(after.id, first.id);
    assert_eq!(after.password_hash, first.password_hash);
}

#[actix_rt::test]
async fn test_register_rejects_bad_input() {
    let (store, auth) = test_state();
    let app = test::init_service(App::new().configure(routes::config(store, auth))).await;

    let cases = [
        (json!({ "password": "password123" }), StatusCode::BAD_REQUEST),
        (json!({ "email": "nopass@example.com" }), StatusCode::BAD_REQUEST),
        (
            json!({ "email": "not-an-email", "password": "password123" }),
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        (
            json!({ "email": "short@example.com", "password": "12345" }),
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
    ];

    for (payload, expected) in cases {
        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected, "payload: {}", payload);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string(), "payload: {}", payload);
    }
}

#[actix_rt::test]
async fn test_login_failures_share_one_response() {
    let (store, auth) = test_state();
    let app = test::init_service(App::new().configure(routes::config(store, auth))).await;

    assert_eq!(
        register_user(&app, "bob@example.com", "password123").await,
        StatusCode::CREATED
    );

    for payload in [
        json!({ "email": "bob@example.com", "password": "password124" }),
        json!({ "email": "nobody@example.com", "password": "password123" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Invalid credentials" }));
    }
}

#[actix_rt::test]
async fn test_health_is_public() {
    let (store, auth) = test_state();
    let app = test::init_service(App::new().configure(routes::config(store, auth))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "memory");
}
