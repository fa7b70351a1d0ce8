//! Handler tests for Users domain
//!
//! These tests drive the users router over HTTP against the in-memory
//! repository:
//! - Request deserialization and validation
//! - Status codes and error envelopes
//! - Partial update and birthday range semantics
//!
//! Dates of birth are far enough in the past that the real clock never
//! changes the outcome of the age check.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use core_config::users::UsersConfig;
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::TestDataBuilder;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    let service = UserService::new(InMemoryUserRepository::new(), UsersConfig::new(18));
    router(service)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn user_json(builder: &TestDataBuilder, suffix: &str, date_of_birth: &str) -> Value {
    json!({
        "firstName": builder.name("first", suffix),
        "lastName": builder.name("last", suffix),
        "email": builder.email(suffix),
        "dateOfBirth": date_of_birth,
    })
}

async fn create(app: &Router, body: Value) -> User {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

async fn expect_error(app: &Router, request: Request<Body>, status: StatusCode) -> Value {
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), status);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_user_returns_201() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_create_201");

    let mut body = user_json(&builder, "main", "1990-01-31");
    body["phoneNumber"] = json!("+380501112233");

    let user = create(&app, body).await;

    assert_eq!(user.id, 1);
    assert_eq!(user.email, builder.email("main"));
    assert_eq!(user.date_of_birth.to_string(), "1990-01-31");
    assert_eq!(user.phone_number.as_deref(), Some("+380501112233"));
    assert!(user.address.is_none());
}

#[tokio::test]
async fn test_create_user_rejects_underage() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_underage");

    // Born a few days ago: in the past, but far below 18
    let recent = (chrono::Utc::now().date_naive() - chrono::Days::new(10)).to_string();
    let body = expect_error(
        &app,
        json_request("POST", "/", user_json(&builder, "young", &recent)),
        StatusCode::BAD_REQUEST,
    )
    .await;

    assert_eq!(body["message"], "User is not above minimum age");

    let list = app.clone().oneshot(get("/")).await.unwrap();
    let users: Vec<User> = json_body(list.into_body()).await;
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_create_user_rejects_duplicate_email() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_duplicate");

    create(&app, user_json(&builder, "dup", "1990-01-01")).await;

    let body = expect_error(
        &app,
        json_request("POST", "/", user_json(&builder, "dup", "1985-05-05")),
        StatusCode::BAD_REQUEST,
    )
    .await;

    assert_eq!(
        body["message"],
        format!("User with email {} already exists", builder.email("dup"))
    );
}

#[tokio::test]
async fn test_create_user_rejects_bad_date_format() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_bad_date");

    for date in ["31-01-1990", "1990-13-01", "1990/01/31"] {
        let body = expect_error(
            &app,
            json_request("POST", "/", user_json(&builder, "main", date)),
            StatusCode::BAD_REQUEST,
        )
        .await;

        assert_eq!(body["message"], "The format of the date must be yyyy-MM-dd", "date {date}");
    }
}

#[tokio::test]
async fn test_create_user_rejects_invalid_email() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_invalid_email");

    let mut payload = user_json(&builder, "main", "1990-01-01");
    payload["email"] = json!("not-an-email");

    let body = expect_error(&app, json_request("POST", "/", payload), StatusCode::BAD_REQUEST).await;

    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["email"].is_array());
}

#[tokio::test]
async fn test_create_user_rejects_future_birth_date() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_future_date");

    let body = expect_error(
        &app,
        json_request("POST", "/", user_json(&builder, "main", "2999-01-01")),
        StatusCode::BAD_REQUEST,
    )
    .await;

    assert_eq!(body["error"], "BAD_REQUEST");
    assert_eq!(body["message"], "Date of birth must be in the past");
}

#[tokio::test]
async fn test_create_user_rejects_missing_field() {
    let app = app();

    let body = expect_error(
        &app,
        json_request("POST", "/", json!({ "firstName": "Only" })),
        StatusCode::BAD_REQUEST,
    )
    .await;

    assert_eq!(body["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_get_user_not_found() {
    let app = app();

    let body = expect_error(&app, get("/42"), StatusCode::NOT_FOUND).await;

    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "User not found with id: 42");
}

#[tokio::test]
async fn test_get_user_rejects_non_integer_id() {
    let app = app();

    let body = expect_error(&app, get("/abc"), StatusCode::BAD_REQUEST).await;

    assert_eq!(body["error"], "INVALID_ID");
}

#[tokio::test]
async fn test_get_user_returns_created_user() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_get");
    let created = create(&app, user_json(&builder, "main", "1990-01-01")).await;

    let response = app.clone().oneshot(get(&format!("/{}", created.id))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let fetched: User = json_body(response.into_body()).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_update_user_changes_only_supplied_fields() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_update_partial");
    let created = create(&app, user_json(&builder, "main", "1990-01-01")).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/{}", created.id),
            json!({ "address": "1 Main St" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: User = json_body(response.into_body()).await;
    assert_eq!(updated.address.as_deref(), Some("1 Main St"));
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.first_name, created.first_name);
    assert_eq!(updated.last_name, created.last_name);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.date_of_birth, created.date_of_birth);
}

#[tokio::test]
async fn test_update_user_keeps_own_email() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_update_same_email");
    let created = create(&app, user_json(&builder, "main", "1990-01-01")).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/{}", created.id),
            json!({ "email": created.email, "firstName": "Renamed" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: User = json_body(response.into_body()).await;
    assert_eq!(updated.first_name, "Renamed");
}

#[tokio::test]
async fn test_update_user_rejects_taken_email() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_update_taken");
    create(&app, user_json(&builder, "first", "1990-01-01")).await;
    let second = create(&app, user_json(&builder, "second", "1990-01-01")).await;

    let body = expect_error(
        &app,
        json_request(
            "PUT",
            &format!("/{}", second.id),
            json!({ "email": builder.email("first") }),
        ),
        StatusCode::BAD_REQUEST,
    )
    .await;

    assert_eq!(
        body["message"],
        format!("User with email {} already exists", builder.email("first"))
    );
}

#[tokio::test]
async fn test_update_missing_user_returns_404() {
    let app = app();

    let body = expect_error(
        &app,
        json_request("PUT", "/7", json!({ "address": "Nowhere" })),
        StatusCode::NOT_FOUND,
    )
    .await;

    assert_eq!(body["message"], "User not found with id: 7");
}

#[tokio::test]
async fn test_delete_user_returns_message() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_delete");
    let created = create(&app, user_json(&builder, "main", "1990-01-01")).await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], format!("User with id {} was deleted", created.id));

    expect_error(&app, get(&format!("/{}", created.id)), StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn test_delete_missing_user_returns_404() {
    let app = app();

    let request = Request::builder()
        .method("DELETE")
        .uri("/99")
        .body(Body::empty())
        .unwrap();
    let body = expect_error(&app, request, StatusCode::NOT_FOUND).await;

    assert_eq!(body["message"], "User not found with id: 99");
}

#[tokio::test]
async fn test_list_users_returns_all() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_list");
    create(&app, user_json(&builder, "a", "1990-01-01")).await;
    create(&app, user_json(&builder, "b", "1980-06-15")).await;

    let response = app.clone().oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let users: Vec<User> = json_body(response.into_body()).await;
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn test_birthday_range_is_inclusive() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_birthdays");
    create(&app, user_json(&builder, "low", "1990-01-01")).await;
    create(&app, user_json(&builder, "mid", "1995-06-15")).await;
    create(&app, user_json(&builder, "high", "2000-01-01")).await;
    create(&app, user_json(&builder, "out", "2000-01-02")).await;

    let response = app
        .clone()
        .oneshot(get("/birthdays?from=1990-01-01&to=2000-01-01"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let users: Vec<User> = json_body(response.into_body()).await;
    let mut emails: Vec<_> = users.into_iter().map(|u| u.email).collect();
    emails.sort();
    let mut expected = vec![builder.email("high"), builder.email("low"), builder.email("mid")];
    expected.sort();
    assert_eq!(emails, expected);
}

#[tokio::test]
async fn test_birthday_range_rejects_reversed_bounds() {
    let app = app();

    let body = expect_error(
        &app,
        get("/birthdays?from=2000-01-01&to=1990-01-01"),
        StatusCode::BAD_REQUEST,
    )
    .await;

    assert_eq!(body["message"], "'from' date must be before 'to' date");
}

#[tokio::test]
async fn test_birthday_range_rejects_bad_format_and_missing_bound() {
    let app = app();

    let body = expect_error(
        &app,
        get("/birthdays?from=1990-1-1&to=2000-01-01"),
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(body["message"], "The format of the date must be yyyy-MM-dd");

    let body = expect_error(&app, get("/birthdays?from=1990-01-01"), StatusCode::BAD_REQUEST).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}
