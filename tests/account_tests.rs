use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use mockito::Server;
use reelbites::config::{BrowseConfig, GatewayConfig, ServerConfig, Settings};
use reelbites::gateway::GatewayClient;
use reelbites::web::handlers::AppState;
use reelbites::web::routes;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

fn test_app(gateway_url: &str) -> Router {
    let settings = Settings {
        gateway: GatewayConfig {
            base_url: gateway_url.to_string(),
            timeout_seconds: 5,
            user_agent: "reelbites-test".to_string(),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            rate_limit: 20,
            max_request_body_size: 65536,
        },
        browse: BrowseConfig {
            page_size: 9,
            max_pages: 10000,
        },
    };
    let gateway = GatewayClient::new(&settings.gateway).unwrap();
    let state = AppState {
        gateway: Arc::new(gateway),
        settings: settings.clone(),
    };
    routes::create_router(state, &settings)
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_login_sets_session_cookie_and_redirects() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"token": "jwt-1"}).to_string())
        .create_async()
        .await;

    let response = test_app(&server.url())
        .oneshot(form_post("/login", "email=primo%40bignight.it&password=secret"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/browse");

    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.contains("reelbites_session=jwt-1"));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_rejected_login_shows_error_on_login_page() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/login")
        .with_status(401)
        .create_async()
        .await;

    let response = test_app(&server.url())
        .oneshot(form_post("/login", "email=a%40b.c&password=wrong"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("Invalid email or password"));
}

#[tokio::test]
async fn test_comment_without_session_redirects_to_login() {
    let server = Server::new_async().await;

    let response = test_app(&server.url())
        .oneshot(form_post("/recipes/7/comments", "content=Wonderful"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/login");
}

#[tokio::test]
async fn test_comment_with_session_posts_and_redirects_back() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/recipes/7/comments")
        .match_header("authorization", "Bearer jwt-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"id": 3, "content": "Wonderful"}).to_string())
        .create_async()
        .await;

    let request = Request::builder()
        .method("POST")
        .uri("/recipes/7/comments")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, "reelbites_session=jwt-1")
        .body(Body::from("content=Wonderful"))
        .unwrap();

    let response = test_app(&server.url()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/recipes/7");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_logout_clears_cookie_and_redirects() {
    let server = Server::new_async().await;

    let request = Request::builder()
        .method("POST")
        .uri("/logout")
        .header(header::COOKIE, "reelbites_session=jwt-1")
        .body(Body::empty())
        .unwrap();

    let response = test_app(&server.url()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/browse");

    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("reelbites_session="));
}
