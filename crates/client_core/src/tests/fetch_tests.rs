use std::time::Duration;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::error::FetchError;
use crate::fetch::FetchClient;

async fn spawn_users_server(router: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}/users")
}

#[tokio::test]
async fn fetch_returns_parsed_user_records() {
    let router = Router::new().route(
        "/users",
        get(|| async {
            Json(json!([{
                "id": 1,
                "name": "Ann Lee",
                "username": "annl",
                "email": "ann@x.com",
                "address": { "city": "Rome" },
                "company": { "name": "Acme" }
            }]))
        }),
    );
    let endpoint = spawn_users_server(router).await;
    let client = FetchClient::new(endpoint);

    let users = client
        .fetch_users(&CancellationToken::new())
        .await
        .expect("fetch succeeds");

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Ann Lee");
    assert_eq!(users[0].address.city, "Rome");
    assert_eq!(users[0].company.name, "Acme");
}

#[tokio::test]
async fn non_success_status_is_a_uniform_fetch_failure() {
    let router = Router::new().route("/users", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let endpoint = spawn_users_server(router).await;
    let client = FetchClient::new(endpoint);

    let err = client
        .fetch_users(&CancellationToken::new())
        .await
        .expect_err("500 must fail");

    assert!(matches!(err, FetchError::Status { status: 500 }));
    assert_eq!(err.to_string(), "Failed to fetch users");
    assert!(!err.is_abort());
}

#[tokio::test]
async fn non_array_body_is_a_decode_error() {
    let router = Router::new().route("/users", get(|| async { Json(json!({ "not": "array" })) }));
    let endpoint = spawn_users_server(router).await;
    let client = FetchClient::new(endpoint);

    let err = client
        .fetch_users(&CancellationToken::new())
        .await
        .expect_err("object body must fail");

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn cancellation_mid_flight_resolves_to_abort() {
    let router = Router::new().route(
        "/users",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Json(json!([]))
        }),
    );
    let endpoint = spawn_users_server(router).await;
    let client = FetchClient::new(endpoint);

    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let err = client.fetch_users(&token).await.expect_err("must abort");
    assert!(err.is_abort());
}

#[tokio::test]
async fn already_cancelled_token_short_circuits() {
    let router = Router::new().route("/users", get(|| async { Json(json!([])) }));
    let endpoint = spawn_users_server(router).await;
    let client = FetchClient::new(endpoint);

    let token = CancellationToken::new();
    token.cancel();

    let err = client.fetch_users(&token).await.expect_err("must abort");
    assert!(err.is_abort());
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Bind and immediately drop to get a port nothing is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = FetchClient::new(format!("http://{addr}/users"));
    let err = client
        .fetch_users(&CancellationToken::new())
        .await
        .expect_err("connection must fail");

    assert!(matches!(err, FetchError::Transport(_)));
    assert!(!err.is_abort());
}
