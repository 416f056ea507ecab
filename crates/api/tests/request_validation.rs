//! HTTP tests for requests that are rejected before any query runs.
//!
//! The app is built on a lazy pool that never connects, so these cover
//! routing, CORS, authentication, role checks and body validation alone.

mod common;

use axum::body::Body;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, AUTHORIZATION, CONTENT_TYPE,
    ORIGIN,
};
use axum::http::{Method, Request, StatusCode};
use common::{
    admin_token, body_json, get, get_auth, lazy_pool, post_json, put_json_auth, request, send,
    submission_body, token_for,
};
use sciday_core::submission::REQUIRED_FIELDS;
use serde_json::json;

const SUBMIT: &str = "/api/v1/submit-registration";
const LIST: &str = "/api/v1/get-registrations";
const UPDATE: &str = "/api/v1/update-registration";

fn app() -> axum::Router {
    common::build_test_app(lazy_pool())
}

// ---------------------------------------------------------------------------
// Submission validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn each_missing_field_is_reported_by_name() {
    for field in REQUIRED_FIELDS {
        let mut body = submission_body("student@example.com");
        body.as_object_mut().unwrap().remove(field);

        let response = post_json(app(), SUBMIT, body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "field {field}");
        let json = body_json(response).await;
        assert_eq!(json["error"], format!("Missing required field: {field}"));
    }
}

#[tokio::test]
async fn empty_string_field_counts_as_missing() {
    let mut body = submission_body("student@example.com");
    body["projectDescription"] = json!("");

    let response = post_json(app(), SUBMIT, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required field: projectDescription");
}

#[tokio::test]
async fn non_numeric_grade_is_rejected() {
    let mut body = submission_body("student@example.com");
    body["grade"] = json!("eleventh");

    let response = post_json(app(), SUBMIT, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid grade: eleventh");
}

#[tokio::test]
async fn numeric_field_does_not_mask_missing_first_name() {
    let mut body = submission_body("student@example.com");
    body["phone"] = json!(5550123);
    body.as_object_mut().unwrap().remove("firstName");

    let response = post_json(app(), SUBMIT, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required field: firstName");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let req = Request::builder()
        .method(Method::POST)
        .uri(SUBMIT)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = send(app(), req).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[tokio::test]
async fn listing_without_token_is_unauthorized() {
    let response = get(app(), LIST).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Unauthorized");
}

#[tokio::test]
async fn listing_with_garbage_token_is_unauthorized() {
    let response = get_auth(app(), LIST, "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_bearer_scheme_is_unauthorized() {
    let req = Request::builder()
        .uri(LIST)
        .header(AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let response = send(app(), req).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn update_without_token_is_unauthorized() {
    let body = json!({ "registrationId": uuid::Uuid::new_v4(), "status": "approved" });
    let response = put_json_auth(app(), UPDATE, None, body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Status update authorization and validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_without_staff_role_is_forbidden() {
    let token = token_for("x@y.com", &["volunteer"]);
    let body = json!({ "registrationId": uuid::Uuid::new_v4(), "status": "approved" });

    let response = put_json_auth(app(), UPDATE, Some(&token), body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Insufficient permissions");
}

#[tokio::test]
async fn role_check_precedes_body_validation() {
    let token = token_for("x@y.com", &[]);
    let response = put_json_auth(app(), UPDATE, Some(&token), json!({})).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn update_with_missing_fields_is_rejected() {
    let token = admin_token();
    let response = put_json_auth(app(), UPDATE, Some(&token), json!({ "status": "approved" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required fields");
}

#[tokio::test]
async fn update_with_unknown_status_is_rejected() {
    let token = token_for("official@school.test", &["school_official"]);
    let body = json!({ "registrationId": uuid::Uuid::new_v4(), "status": "waitlisted" });

    let response = put_json_auth(app(), UPDATE, Some(&token), body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid status");
}

// ---------------------------------------------------------------------------
// Methods, preflight, and unknown routes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn wrong_method_returns_json_405() {
    for (method, uri) in [
        (Method::GET, SUBMIT),
        (Method::POST, LIST),
        (Method::DELETE, UPDATE),
        (Method::GET, UPDATE),
    ] {
        let response = request(app(), method.clone(), uri).await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        let json = body_json(response).await;
        assert_eq!(json["error"], "Method not allowed");
    }
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri(SUBMIT)
        .header(ORIGIN, "https://scienceday.example")
        .header(ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = send(app(), req).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn bare_options_returns_200() {
    for uri in [SUBMIT, LIST, UPDATE] {
        let response = request(app(), Method::OPTIONS, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn cross_origin_errors_carry_cors_header() {
    let req = Request::builder()
        .uri(LIST)
        .header(ORIGIN, "https://scienceday.example")
        .body(Body::empty())
        .unwrap();

    let response = send(app(), req).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let response = get(app(), "/api/v1/no-such-function").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Not found");
}

#[tokio::test]
async fn categories_are_served_without_database() {
    let response = get(app(), "/api/v1/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let categories = json.as_array().unwrap();
    assert_eq!(categories.len(), 6);
    assert_eq!(categories[0]["id"], "biology");
}

#[tokio::test]
async fn responses_carry_request_id() {
    let response = get(app(), LIST).await;
    assert!(response.headers().get("x-request-id").is_some());
}
