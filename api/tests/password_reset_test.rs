//! Integration tests for the forgot / verify / reset password flow

mod common;

use actix_web::{http::StatusCode, test};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use std::sync::Arc;

use atom_core::services::{ManualClock, OtpStore, OtpVerification};

use common::{RecordingMailer, TestContext, PASSWORD};

const NEW_PASSWORD: &str = "N3w!Password";

#[actix_web::test]
async fn test_full_reset_flow_consumes_code() {
    let ctx = TestContext::new();
    ctx.seed_user("Arun", "arun@example.com", "9876543210").await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/forgot-password")
        .set_json(json!({"email": "Arun@Example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "OTP sent to your email.");

    let sent = ctx.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "arun@example.com");
    let code = ctx.mailer.last_code().expect("code in mail body");

    // Verification does not use the code up
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/auth/verify-otp")
            .set_json(json!({"email": "arun@example.com", "otp": code}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::post()
        .uri("/api/auth/reset-password")
        .set_json(json!({"email": "arun@example.com", "otp": code, "newPassword": NEW_PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Password reset successfully. You can now log in.");

    assert_eq!(
        ctx.otp_store.verify("arun@example.com", &code),
        OtpVerification::Invalid
    );

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": "arun@example.com", "password": PASSWORD}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": "arun@example.com", "password": NEW_PASSWORD}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_forgot_password_rejections() {
    let ctx = TestContext::new();
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/forgot-password")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Email is required.");

    let req = test::TestRequest::post()
        .uri("/api/auth/forgot-password")
        .set_json(json!({"email": "ghost@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No account found with that email.");

    assert!(ctx.mailer.sent().is_empty());
    assert!(ctx.otp_store.is_empty());
}

#[actix_web::test]
async fn test_mail_failure_is_bad_gateway() {
    let ctx = TestContext::with_parts(RecordingMailer::failing(), OtpStore::default());
    ctx.seed_user("Arun", "arun@example.com", "9876543210").await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/forgot-password")
        .set_json(json!({"email": "arun@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "MAIL_DELIVERY_FAILED");
    assert!(body["error"].as_str().unwrap().contains("Could not send"));
}

#[actix_web::test]
async fn test_wrong_code_is_bad_request() {
    let ctx = TestContext::new();
    ctx.seed_user("Arun", "arun@example.com", "9876543210").await;
    ctx.otp_store.issue("arun@example.com");
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-otp")
        .set_json(json!({"email": "arun@example.com", "otp": "not-it"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid OTP. Please check and try again.");

    let req = test::TestRequest::post()
        .uri("/api/auth/reset-password")
        .set_json(json!({"email": "arun@example.com", "otp": "not-it", "newPassword": NEW_PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid OTP.");

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-otp")
        .set_json(json!({"email": "arun@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Email and OTP are required.");
}

#[actix_web::test]
async fn test_expired_code_is_gone() {
    let clock = Arc::new(ManualClock::new(Utc::now()));
    let store = OtpStore::with_clock(Duration::minutes(10), clock.clone());
    let ctx = TestContext::with_parts(RecordingMailer::default(), store);
    ctx.seed_user("Arun", "arun@example.com", "9876543210").await;
    let code = ctx.otp_store.issue("arun@example.com");
    let app = test::init_service(ctx.app()).await;

    clock.advance(Duration::minutes(11));

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-otp")
        .set_json(json!({"email": "arun@example.com", "otp": code}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::GONE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "OTP has expired. Please request a new one.");
    assert_eq!(body["code"], "OTP_EXPIRED");

    // Expiry is reported once; the entry is gone afterwards
    let req = test::TestRequest::post()
        .uri("/api/auth/reset-password")
        .set_json(json!({"email": "arun@example.com", "otp": code, "newPassword": NEW_PASSWORD}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_reset_with_weak_password_keeps_code() {
    let ctx = TestContext::new();
    ctx.seed_user("Arun", "arun@example.com", "9876543210").await;
    let code = ctx.otp_store.issue("arun@example.com");
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/reset-password")
        .set_json(json!({"email": "arun@example.com", "otp": code, "newPassword": "nouppercase1!"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Password must contain at least 1 uppercase letter.");

    assert_eq!(ctx.otp_store.verify("arun@example.com", &code), OtpVerification::Ok);
}
