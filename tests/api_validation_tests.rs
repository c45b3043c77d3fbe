// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API input validation tests.
//!
//! Validation runs before any store access, so these pass against the
//! offline test app.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

mod common;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_sync_profile_missing_google_id() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({ "name": "Test", "email": "t@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sync_profile_empty_name() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({ "google_id": "g1", "name": "", "email": "t@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_player_missing_player_name() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/users/g1/players",
            json!({ "player_id": "p1" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_team_missing_team_id() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/users/g1/teams",
            json!({ "team_name": "Lakers" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_missing_token() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/notifications/register",
            json!({ "userId": "g1", "platform": "ios" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_unknown_platform() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/notifications/register",
            json!({ "token": "tok1", "userId": "g1", "platform": "blackberry" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_send_missing_body() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/notifications/send",
            json!({ "userId": "g1", "title": "Hi" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_broadcast_missing_title() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/notifications/broadcast",
            json!({ "body": "Hello" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
