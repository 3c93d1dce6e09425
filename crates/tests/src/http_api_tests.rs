use std::cell::Cell;
use std::rc::Rc;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use session::api::{ApiClient, AuthApi, HttpAuthApi};
use session::errors::ApiError;
use shared_types::ApiConfig;

use crate::common;

fn api_for(base_url: &str) -> HttpAuthApi {
    HttpAuthApi::new(ApiConfig::with_base_url(base_url))
}

/// A stand-in for any protected REST endpoint: echoes back whatever
/// `Authorization` header the request carried.
fn echo_auth_router() -> Router {
    Router::new().route(
        "/eventos",
        get(|headers: HeaderMap| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string();
            Json(json!({ "authorization": auth }))
        }),
    )
}

#[tokio::test]
async fn test_login_round_trips_the_wire_envelope() {
    let issued = common::forge_session_token("ana@example.com", 42, &["PARTICIPANTE"]);
    let token = issued.clone();
    let app = Router::new().route(
        "/auth/login",
        post(move |Json(body): Json<Value>| {
            let token = token.clone();
            // Echoing the submitted email back pins the request's wire
            // field names as well as the response's.
            async move {
                Json(json!({
                    "status": true,
                    "message": body["correo"],
                    "extraData": { "accessToken": token }
                }))
            }
        }),
    );
    let base = common::spawn_backend(app).await;

    let response = api_for(&base)
        .login(&common::login_request("ana@example.com", "secret1"))
        .await
        .unwrap();

    assert!(response.status);
    assert_eq!(response.message.as_deref(), Some("ana@example.com"));
    assert_eq!(response.access_token(), Some(issued.as_str()));
}

#[tokio::test]
async fn test_rejection_on_an_error_status_still_resolves_the_envelope() {
    let app = Router::new().route(
        "/auth/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "status": false, "message": "Credenciales incorrectas" })),
            )
        }),
    );
    let base = common::spawn_backend(app).await;

    let response = api_for(&base)
        .login(&common::login_request("ana@example.com", "wrong"))
        .await
        .unwrap();

    assert!(!response.status);
    assert_eq!(response.message.as_deref(), Some("Credenciales incorrectas"));
}

#[tokio::test]
async fn test_success_status_with_an_unreadable_body_is_a_body_error() {
    let app = Router::new().route(
        "/auth/login",
        post(|| async { "<!doctype html><p>gateway placeholder</p>" }),
    );
    let base = common::spawn_backend(app).await;

    let err = api_for(&base)
        .login(&common::login_request("ana@example.com", "secret1"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Body(_)));
}

#[tokio::test]
async fn test_error_status_without_an_envelope_maps_to_the_status() {
    let app = Router::new().route(
        "/auth/login",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "internal error") }),
    );
    let base = common::spawn_backend(app).await;

    let err = api_for(&base)
        .login(&common::login_request("ana@example.com", "secret1"))
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::Http(500));
}

#[tokio::test]
async fn test_bearer_token_rides_outgoing_requests() {
    let base = common::spawn_backend(echo_auth_router()).await;

    let client = ApiClient::new(ApiConfig::with_base_url(&base), Box::new(|| {}));
    client.set_token(Some("tok.en.sig".to_string()));

    let body: Value = client.get_json("eventos").await.unwrap();
    assert_eq!(body["authorization"], "Bearer tok.en.sig");
}

#[tokio::test]
async fn test_requests_without_a_session_carry_no_bearer() {
    let base = common::spawn_backend(echo_auth_router()).await;

    let client = ApiClient::new(ApiConfig::with_base_url(&base), Box::new(|| {}));

    let body: Value = client.get_json("eventos").await.unwrap();
    assert_eq!(body["authorization"], "");
}

#[tokio::test]
async fn test_post_json_round_trips_the_body() {
    let app = Router::new().route(
        "/certificados",
        post(|Json(body): Json<Value>| async move { Json(body) }),
    );
    let base = common::spawn_backend(app).await;

    let client = ApiClient::new(ApiConfig::with_base_url(&base), Box::new(|| {}));
    let sent = json!({ "evento": 12, "plantilla": "asistencia" });

    let received: Value = client.post_json("certificados", &sent).await.unwrap();
    assert_eq!(received, sent);
}

#[tokio::test]
async fn test_a_401_fires_the_hook_and_clears_the_token() {
    let app = Router::new().route("/eventos", get(|| async { StatusCode::UNAUTHORIZED }));
    let base = common::spawn_backend(app).await;

    let fired = Rc::new(Cell::new(false));
    let observed = fired.clone();
    let client = ApiClient::new(
        ApiConfig::with_base_url(&base),
        Box::new(move || observed.set(true)),
    );
    client.set_token(Some("tok.en.sig".to_string()));

    let err = client.get_json::<Value>("eventos").await.unwrap_err();

    assert_eq!(err, ApiError::Unauthorized);
    assert!(fired.get());
    assert_eq!(client.token(), None);
}

#[tokio::test]
async fn test_other_error_statuses_do_not_fire_the_hook() {
    let app = Router::new().route("/eventos", get(|| async { StatusCode::FORBIDDEN }));
    let base = common::spawn_backend(app).await;

    let fired = Rc::new(Cell::new(false));
    let observed = fired.clone();
    let client = ApiClient::new(
        ApiConfig::with_base_url(&base),
        Box::new(move || observed.set(true)),
    );
    client.set_token(Some("tok.en.sig".to_string()));

    let err = client.get_json::<Value>("eventos").await.unwrap_err();

    assert_eq!(err, ApiError::Http(403));
    assert!(!fired.get());
    assert_eq!(client.token().as_deref(), Some("tok.en.sig"));
}
