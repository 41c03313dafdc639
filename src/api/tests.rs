use std::rc::Rc;

use httpmock::prelude::*;
use serde_json::json;

use super::*;
use crate::error::AuthError;
use crate::session::{persist_login, MemorySession, Session, SessionStore, TOKEN_KEY};

fn client_for(server: &MockServer) -> (ApiClient, Rc<MemorySession>) {
    let store = MemorySession::shared();
    let api = ApiClient::new_with_base_url(server.base_url(), store.clone());
    (api, store)
}

/// Points at a port nothing listens on, to simulate a network-level failure.
fn unreachable_client() -> (ApiClient, Rc<MemorySession>) {
    let store = MemorySession::shared();
    let api = ApiClient::new_with_base_url("http://127.0.0.1:9", store.clone());
    (api, store)
}

fn course_json(id: u32) -> serde_json::Value {
    json!({
        "id": id,
        "title": "Live Course",
        "description": "Served by the API",
        "instructor": "Live Instructor",
        "thumbnail": "live.png",
        "category": "programming",
        "duration": "2 weeks",
        "level": "Beginner",
        "rating": 4.0,
        "students": 5,
        "price": 10,
        "status": "enrolled",
        "progress": 20
    })
}

#[tokio::test]
async fn login_success_persists_token_and_email() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(200).json_body(json!({ "token": "t1" }));
    });
    let (api, store) = client_for(&server);

    let session = api.login("alice@example.com", "secret", true).await.unwrap();

    assert_eq!(session.token.as_deref(), Some("t1"));
    assert_eq!(session.user_email.as_deref(), Some("alice@example.com"));
    assert!(session.remember_me);
    assert!(api.is_authenticated());
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t1"));
}

#[tokio::test]
async fn login_failure_reports_api_error_and_leaves_store_untouched() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(400).json_body(json!({ "error": "user not found" }));
    });
    let (api, store) = client_for(&server);

    let err = api.login("a@example.com", "nope", false).await.unwrap_err();

    assert_eq!(err, AuthError::Api("user not found".into()));
    assert_eq!(Session::load(&*store), Session::default());
}

#[tokio::test]
async fn login_success_without_token_is_an_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(200).json_body(json!({}));
    });
    let (api, store) = client_for(&server);

    let err = api.login("a@example.com", "pw", false).await.unwrap_err();

    assert!(matches!(err, AuthError::Api(_)));
    assert!(store.get(TOKEN_KEY).is_none());
}

#[tokio::test]
async fn login_network_failure_is_an_auth_error() {
    let (api, store) = unreachable_client();
    let err = api.login("a@example.com", "pw", false).await.unwrap_err();
    assert!(matches!(err, AuthError::Network(_)));
    assert!(store.get(TOKEN_KEY).is_none());
}

#[tokio::test]
async fn register_defaults_token_when_api_omits_one() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/register");
        then.status(200).json_body(json!({ "id": 4 }));
    });
    let (api, _store) = client_for(&server);

    let session = api
        .register("Bob Builder", "bob@example.com", "abcdef", "abcdef")
        .await
        .unwrap();

    assert_eq!(session.token.as_deref(), Some(REGISTER_TOKEN_FALLBACK));
    assert_eq!(session.user_email.as_deref(), Some("bob@example.com"));
    assert_eq!(session.user_name.as_deref(), Some("Bob Builder"));
}

#[tokio::test]
async fn register_uses_api_token_when_present() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/register");
        then.status(200).json_body(json!({ "id": 4, "token": "fresh" }));
    });
    let (api, _store) = client_for(&server);

    let session = api
        .register("Bob", "bob@example.com", "abcdef", "abcdef")
        .await
        .unwrap();
    assert_eq!(session.token.as_deref(), Some("fresh"));
}

#[tokio::test]
async fn register_without_id_fails() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/register");
        then.status(200).json_body(json!({ "token": "t" }));
    });
    let (api, store) = client_for(&server);

    let err = api
        .register("Bob", "bob@example.com", "abcdef", "abcdef")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Api(_)));
    assert!(store.get(TOKEN_KEY).is_none());
}

#[tokio::test]
async fn register_validation_short_circuits_before_any_request() {
    // Unreachable endpoint: a network attempt would surface as Network, so
    // a Validation error proves no request was issued.
    let (api, store) = unreachable_client();

    let err = api
        .register("Bob", "bob@example.com", "abc", "abc")
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = api
        .register("Bob", "bob@example.com", "abcdef", "abcxyz")
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(store.get(TOKEN_KEY).is_none());
}

#[tokio::test]
async fn password_reset_always_succeeds() {
    let (api, _store) = unreachable_client();
    assert!(api.request_password_reset("a@example.com").await.is_ok());
}

#[tokio::test]
async fn logout_then_session_yields_all_absent_fields() {
    let store = MemorySession::shared();
    persist_login(&*store, "t1", "a@example.com", true);
    let api = ApiClient::with_store(store);

    api.logout();

    assert_eq!(api.session(), Session::default());
    assert!(!api.is_authenticated());
}

#[tokio::test]
async fn get_courses_parses_wrapped_list() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/courses");
        then.status(200)
            .json_body(json!({ "courses": [course_json(7)] }));
    });
    let store = MemorySession::shared();
    persist_login(&*store, "t1", "a@example.com", false);
    let api = ApiClient::new_with_base_url(server.base_url(), store);

    let courses = api.get_courses().await.unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, 7);
}

#[tokio::test]
async fn get_courses_maps_http_failure_to_status_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/courses");
        then.status(500).json_body(json!({}));
    });
    let (api, _store) = client_for(&server);

    let err = api.get_courses().await.unwrap_err();
    assert_eq!(err, crate::error::LoadError::Status(500));
}
