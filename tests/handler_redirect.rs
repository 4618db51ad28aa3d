mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use url_shortener::api::handlers::redirect_handler;
use url_shortener::state::AppState;

fn redirect_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/{id}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let (state, store) = common::create_test_state();
    let server = redirect_server(state);

    common::seed_link(&store, "QrPnX5IU", "https://practicum.yandex.ru/").await;

    let response = server.get("/QrPnX5IU").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://practicum.yandex.ru/");
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _store) = common::create_test_state();
    let server = redirect_server(state);

    let response = server.get("/wrong").await;

    response.assert_status_not_found();
    response.assert_text("URL not found");
    assert!(response.headers().get("location").is_none());
}

#[tokio::test]
async fn test_redirect_keeps_url_exactly_as_stored() {
    let (state, store) = common::create_test_state();
    let server = redirect_server(state);

    let url = "HTTPS://Example.COM:443/Path?q=1#frag";
    common::seed_link(&store, "abcdefgh", url).await;

    let response = server.get("/abcdefgh").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), url);
}

#[tokio::test]
async fn test_redirect_follows_latest_write() {
    let (state, store) = common::create_test_state();
    let server = redirect_server(state);

    common::seed_link(&store, "abcdefgh", "https://first.example").await;
    common::seed_link(&store, "abcdefgh", "https://second.example").await;

    let response = server.get("/abcdefgh").await;

    assert_eq!(response.header("location"), "https://second.example");
}

#[tokio::test]
async fn test_redirect_unrepresentable_location() {
    let (state, store) = common::create_test_state();
    let server = redirect_server(state);

    common::seed_link(&store, "badvalue", "https://example.com/\nInjected: yes").await;

    let response = server.get("/badvalue").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get("location").is_none());
}

#[tokio::test]
async fn test_redirect_store_failure() {
    let server = redirect_server(common::create_failing_state());

    let response = server.get("/QrPnX5IU").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().contains("backend offline"));
}
