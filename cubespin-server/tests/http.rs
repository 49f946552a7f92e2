use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use cubespin_core::VertexService;
use serde_json::Value;
use tower::ServiceExt;

async fn get(uri: &str) -> Response {
    let app = cubespin_server::app(Arc::new(VertexService::new("test-host")));
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

fn content_type(response: &Response) -> &str {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_health() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Health : OK");
}

#[tokio::test]
async fn test_index_page() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));
    assert!(body_text(response).await.contains("/computeVertices?angle="));
}

#[tokio::test]
async fn test_compute_vertices_at_zero() {
    let response = get("/computeVertices?angle=0").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("application/json"));

    let json = body_json(response).await;
    assert_eq!(json["servername"], "test-host");
    assert_eq!(json["angle"], 0);

    let vertices = json["vertices"].as_array().unwrap();
    assert_eq!(vertices.len(), 8);
    let x = vertices[0]["x"].as_f64().unwrap();
    let y = vertices[0]["y"].as_f64().unwrap();
    assert!((x - 148.8).abs() < 1e-3);
    assert!((y - 151.2).abs() < 1e-3);

    assert_eq!(
        json["pointOrder"],
        serde_json::json!([[0, 1, 2, 3], [1, 5, 6, 2], [5, 4, 7, 6], [4, 0, 3, 7], [0, 4, 5, 1], [3, 2, 6, 7]])
    );
}

#[tokio::test]
async fn test_out_of_range_angles_accepted() {
    for (query, angle) in [("-90", -90), ("720", 720), ("%2B45", 45)] {
        let response = get(&format!("/computeVertices?angle={}", query)).await;
        assert_eq!(response.status(), StatusCode::OK, "angle {}", query);
        let json = body_json(response).await;
        assert_eq!(json["angle"], angle);
        assert_eq!(json["vertices"].as_array().unwrap().len(), 8);
    }
}

#[tokio::test]
async fn test_full_turn_matches_zero() {
    let zero = body_json(get("/computeVertices?angle=0").await).await;
    let turn = body_json(get("/computeVertices?angle=360").await).await;

    for (a, b) in zero["vertices"]
        .as_array()
        .unwrap()
        .iter()
        .zip(turn["vertices"].as_array().unwrap())
    {
        for axis in ["x", "y"] {
            let diff = a[axis].as_f64().unwrap() - b[axis].as_f64().unwrap();
            assert!(diff.abs() < 1e-3);
        }
    }
    assert_eq!(zero["pointOrder"], turn["pointOrder"]);
}

#[tokio::test]
async fn test_repeated_angle_uses_first_value() {
    let response = get("/computeVertices?angle=5&angle=7").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("application/json"));

    let json = body_json(response).await;
    assert_eq!(json["angle"], 5);
    assert_eq!(json["vertices"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_repeated_bad_angle_is_json_error() {
    let response = get("/computeVertices?angle=x&angle=7").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(content_type(&response).starts_with("application/json"));
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().starts_with("invalid input"));
}

#[tokio::test]
async fn test_missing_angle_is_bad_request() {
    let response = get("/computeVertices").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("angle"));
    assert!(json.get("vertices").is_none());
}

#[tokio::test]
async fn test_malformed_angle_is_bad_request() {
    for query in ["", "abc", "1.5", "12deg"] {
        let response = get(&format!("/computeVertices?angle={}", query)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "angle {:?}", query);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().starts_with("invalid input"));
    }
}

#[tokio::test]
async fn test_unknown_route() {
    let response = get("/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
