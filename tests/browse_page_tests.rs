use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use mockito::{Matcher, Server, ServerGuard};
use reelbites::config::{BrowseConfig, GatewayConfig, ServerConfig, Settings};
use reelbites::gateway::GatewayClient;
use reelbites::web::handlers::AppState;
use reelbites::web::routes;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

fn test_settings(gateway_url: &str) -> Settings {
    Settings {
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
    }
}

fn test_app(gateway_url: &str) -> Router {
    let settings = test_settings(gateway_url);
    let gateway = GatewayClient::new(&settings.gateway).unwrap();
    let state = AppState {
        gateway: Arc::new(gateway),
        settings: settings.clone(),
    };
    routes::create_router(state, &settings)
}

async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn recipes_page_body(count: usize, total_pages: usize) -> String {
    let content: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "id": i as i64 + 1,
                "title": format!("Test Dish {}", i + 1),
                "movieTitle": "Big Night",
                "prepTimeMinutes": 10,
                "cookTimeMinutes": 20,
                "difficulty": 2,
                "avgRating": 4.2,
                "ratingsCount": 12,
            })
        })
        .collect();

    json!({ "content": content, "totalPages": total_pages }).to_string()
}

async fn mock_listing(server: &mut ServerGuard, body: String) {
    server
        .mock("GET", "/recipes")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;
}

#[tokio::test]
async fn test_browse_renders_cards_and_pagination() {
    let mut server = Server::new_async().await;
    mock_listing(&mut server, recipes_page_body(9, 3)).await;

    let (status, body) = get_body(test_app(&server.url()), "/browse").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("class=\"recipe-card\"").count(), 9);
    assert!(body.contains("Test Dish 1"));
    assert!(body.contains("Big Night"));
    assert!(body.contains("Medium"));
    assert!(body.contains("30 min"));

    // Page 1 of 3: current page marked, others linked, Prev disabled, Next live
    assert!(body.contains("aria-current=\"page\">1<"));
    assert!(body.contains("href=\"/browse?page=2\""));
    assert!(body.contains("href=\"/browse?page=3\""));
    assert!(body.contains("aria-disabled=\"true\">Previous<"));
    assert!(body.contains(">Next</a>"));
}

#[tokio::test]
async fn test_browse_empty_result_shows_message_and_no_pagination() {
    let mut server = Server::new_async().await;
    mock_listing(&mut server, recipes_page_body(0, 0)).await;

    let (status, body) = get_body(test_app(&server.url()), "/browse").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No recipes found."));
    assert!(!body.contains("class=\"pagination\""));
    assert!(!body.contains(">Previous<"));
    assert!(!body.contains(">Next<"));
}

#[tokio::test]
async fn test_browse_single_page_has_no_pagination() {
    let mut server = Server::new_async().await;
    mock_listing(&mut server, recipes_page_body(4, 1)).await;

    let (_, body) = get_body(test_app(&server.url()), "/browse").await;

    assert_eq!(body.matches("class=\"recipe-card\"").count(), 4);
    assert!(!body.contains("class=\"pagination\""));
}

#[tokio::test]
async fn test_browse_survives_gateway_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/recipes")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let (status, body) = get_body(test_app(&server.url()), "/browse").await;

    // The browse list never 500s; it renders degraded instead
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("temporarily unavailable"));
    assert!(!body.contains("class=\"recipe-card\""));
}

#[tokio::test]
async fn test_search_translates_to_zero_based_page_with_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/recipes")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("size".into(), "9".into()),
            Matcher::UrlEncoded("sort".into(), "createdAt,desc".into()),
            Matcher::UrlEncoded("q".into(), "pasta".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(recipes_page_body(9, 5))
        .create_async()
        .await;

    let (status, _) = get_body(test_app(&server.url()), "/browse?q=pasta&page=3").await;

    assert_eq!(status, StatusCode::OK);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unparseable_page_falls_back_to_first_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/recipes")
        .match_query(Matcher::UrlEncoded("page".into(), "0".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(recipes_page_body(1, 1))
        .create_async()
        .await;

    let (status, _) = get_body(test_app(&server.url()), "/browse?page=bogus").await;

    assert_eq!(status, StatusCode::OK);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_filters_never_reach_the_gateway() {
    let mut server = Server::new_async().await;
    // Exact query pin: the listing request carries page/size/sort and
    // nothing else, no matter which filters are active
    let mock = server
        .mock("GET", "/recipes")
        .match_query(Matcher::Exact("page=0&size=9&sort=createdAt,desc".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(recipes_page_body(2, 1))
        .create_async()
        .await;

    let (status, body) = get_body(
        test_app(&server.url()),
        "/browse?difficulty=Easy,Hard&time=30&diet=Vegan",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    mock.assert_async().await;

    // The chips still render as active and the clear link is offered
    assert!(body.contains("chip active"));
    assert!(body.contains("Clear filters"));
}

#[tokio::test]
async fn test_search_form_cannot_carry_a_stale_page() {
    let mut server = Server::new_async().await;
    mock_listing(&mut server, recipes_page_body(9, 3)).await;

    // Even when deep into the list, the search form has no page field, so
    // submitting it always resolves to page 1
    let (_, body) = get_body(test_app(&server.url()), "/browse?page=3").await;

    let form_start = body.find("class=\"search-form\"").unwrap();
    let form_end = body[form_start..].find("</form>").unwrap() + form_start;
    assert!(!body[form_start..form_end].contains("name=\"page\""));
}

#[tokio::test]
async fn test_recipe_detail_renders_with_comments() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/recipes/7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": 7,
                "title": "Timpano",
                "movieTitle": "Big Night",
                "prepTimeMinutes": 90,
                "cookTimeMinutes": 60,
                "difficulty": 5,
                "avgRating": 4.8,
                "ratingsCount": 31,
                "ingredients": ["Pasta", "Eggs"],
                "steps": ["Layer everything", "Bake"]
            })
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/recipes/7/comments")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                {"id": 1, "authorName": "Primo", "content": "To eat good food is to be close to God", "createdAt": "2026-01-02T10:00:00Z"}
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let (status, body) = get_body(test_app(&server.url()), "/recipes/7").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Timpano"));
    assert!(body.contains("Inspired by Big Night"));
    assert!(body.contains("Hard"));
    assert!(body.contains("150 min total"));
    assert!(body.contains("Layer everything"));
    assert!(body.contains("Primo"));
}

#[tokio::test]
async fn test_recipe_detail_degrades_when_comments_fail() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/recipes/7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"id": 7, "title": "Timpano"}).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/recipes/7/comments")
        .with_status(500)
        .create_async()
        .await;

    let (status, body) = get_body(test_app(&server.url()), "/recipes/7").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Timpano"));
    assert!(body.contains("No comments yet."));
}

#[tokio::test]
async fn test_missing_recipe_is_a_404() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/recipes/99")
        .with_status(404)
        .create_async()
        .await;
    server
        .mock("GET", "/recipes/99/comments")
        .with_status(404)
        .create_async()
        .await;

    let (status, _) = get_body(test_app(&server.url()), "/recipes/99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_optional_fields_render_defaults() {
    let mut server = Server::new_async().await;
    mock_listing(
        &mut server,
        json!({
            "content": [{"id": 1, "title": "Mystery Dish"}],
            "totalPages": 1
        })
        .to_string(),
    )
    .await;

    let (status, body) = get_body(test_app(&server.url()), "/browse").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Unknown Movie"));
    assert!(body.contains("/static/img/placeholder-dish.svg"));
    assert!(body.contains("0 min"));
    assert!(body.contains("Easy"));
}
