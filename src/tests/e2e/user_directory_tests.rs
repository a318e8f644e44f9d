// End to end flow over the full router: every route, one shared store.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;

fn app() -> Router {
    router(AppState::in_memory(18))
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn it_should_manage_a_user_through_its_full_lifecycle() {
    let app = app();

    let create_body = r#"{
        "email": "jane.doe@example.com",
        "firstName": "Jane",
        "lastName": "Doe",
        "birthDate": "1990-01-15",
        "address": "12 Main St",
        "phoneNumber": "0612345678"
    }"#;
    let created = app
        .clone()
        .oneshot(json_request("POST", "/users", create_body))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body_json(created).await;
    assert_eq!(created["email"], "jane.doe@example.com");

    let patched = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            "/users/jane.doe@example.com",
            r#"{"lastName":"Smith","address":null}"#,
        ))
        .await
        .unwrap();
    assert_eq!(patched.status(), StatusCode::OK);
    let patched = body_json(patched).await;
    assert_eq!(patched["lastName"], "Smith");
    assert_eq!(patched["firstName"], "Jane");
    assert_eq!(patched["address"], serde_json::Value::Null);

    let found = app
        .clone()
        .oneshot(empty_request(
            "GET",
            "/users/search?from=1987-02-03&to=1995-03-13",
        ))
        .await
        .unwrap();
    assert_eq!(found.status(), StatusCode::OK);
    let found = body_json(found).await;
    assert_eq!(found.as_array().map(|a| a.len()), Some(1));
    assert_eq!(found[0]["lastName"], "Smith");

    let replace_body = r#"{
        "email": "jane.doe@example.com",
        "firstName": "And",
        "lastName": "Klm",
        "birthDate": "1987-02-03",
        "address": "22 st",
        "phoneNumber": "1987654321"
    }"#;
    let replaced = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/users/jane.doe@example.com",
            replace_body,
        ))
        .await
        .unwrap();
    assert_eq!(replaced.status(), StatusCode::OK);
    let replaced = body_json(replaced).await;
    assert_eq!(replaced["firstName"], "And");
    assert_eq!(replaced["birthDate"], "1987-02-03");

    let deleted = app
        .clone()
        .oneshot(empty_request("DELETE", "/users/jane.doe@example.com"))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let deleted_again = app
        .clone()
        .oneshot(empty_request("DELETE", "/users/jane.doe@example.com"))
        .await
        .unwrap();
    assert_eq!(deleted_again.status(), StatusCode::NOT_FOUND);

    let empty = app
        .oneshot(empty_request(
            "GET",
            "/users/search?from=1987-02-03&to=1995-03-13",
        ))
        .await
        .unwrap();
    assert_eq!(empty.status(), StatusCode::OK);
    assert_eq!(body_json(empty).await, serde_json::json!([]));
}

#[tokio::test]
async fn it_should_keep_the_store_usable_after_rejected_requests() {
    let app = app();

    let underage = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/users",
            r#"{"email":"kid@example.com","firstName":"Kid","lastName":"Doe","birthDate":"2020-01-01"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(underage.status(), StatusCode::BAD_REQUEST);

    let bad_range = app
        .clone()
        .oneshot(empty_request(
            "GET",
            "/users/search?from=1997-02-03&to=1985-03-13",
        ))
        .await
        .unwrap();
    assert_eq!(bad_range.status(), StatusCode::BAD_REQUEST);

    let created = app
        .oneshot(json_request(
            "POST",
            "/users",
            r#"{"email":"jane.doe@example.com","firstName":"Jane","lastName":"Doe","birthDate":"1990-01-15"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn it_should_keep_a_created_record_identical_after_replacing_it_with_itself() {
    let app = app();
    let body = r#"{
        "email": "jane.doe@example.com",
        "firstName": "Jane",
        "lastName": "Doe",
        "birthDate": "1990-01-15",
        "address": "12 Main St",
        "phoneNumber": "0612345678"
    }"#;

    let created = app
        .clone()
        .oneshot(json_request("POST", "/users", body))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body_json(created).await;

    let replaced = app
        .clone()
        .oneshot(json_request("PUT", "/users/jane.doe@example.com", body))
        .await
        .unwrap();
    assert_eq!(replaced.status(), StatusCode::OK);
    assert_eq!(body_json(replaced).await, created);

    let found = app
        .oneshot(empty_request(
            "GET",
            "/users/search?from=1990-01-14&to=1990-01-16",
        ))
        .await
        .unwrap();
    let found = body_json(found).await;
    assert_eq!(found.as_array().map(|a| a.len()), Some(1));
    assert_eq!(found[0], created);
}
