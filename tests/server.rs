use std::net::SocketAddr;
use std::sync::Arc;

use arch_compass::server::router;
use arch_compass::store::memory::InMemoryStore;
use serde_json::{json, Value};

async fn spawn_server() -> SocketAddr {
    let app = router(Arc::new(InMemoryStore::builtin()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn get(addr: SocketAddr, path: &str) -> (u16, Value) {
    let resp = reqwest::get(format!("http://{}{}", addr, path)).await.unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

async fn post_compare(addr: SocketAddr, body: Value) -> (u16, Value) {
    let resp = reqwest::Client::new()
        .post(format!("http://{}/compare", addr))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn test_health() {
    let addr = spawn_server().await;
    let (status, body) = get(addr, "/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_patterns() {
    let addr = spawn_server().await;

    let (status, body) = get(addr, "/patterns").await;
    assert_eq!(status, 200);
    assert_eq!(body["patterns"].as_array().unwrap().len(), 6);

    let (status, body) = get(addr, "/patterns?complexity=low").await;
    assert_eq!(status, 200);
    let ids: Vec<&str> = body["patterns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["layered", "monolithic"]);
}

#[tokio::test]
async fn test_list_patterns_bad_filter() {
    let addr = spawn_server().await;
    let (status, body) = get(addr, "/patterns?category=mainframe").await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn test_get_pattern() {
    let addr = spawn_server().await;

    let (status, body) = get(addr, "/patterns/serverless").await;
    assert_eq!(status, 200);
    assert_eq!(body["id"], "serverless");
    assert!(body["characteristics"]["teamSize"].is_string());

    let (status, body) = get(addr, "/patterns/ghost").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_criteria() {
    let addr = spawn_server().await;
    let (status, body) = get(addr, "/criteria").await;
    assert_eq!(status, 200);

    let criteria = body["criteria"].as_array().unwrap();
    assert_eq!(criteria.len(), 8);
    let total: f64 = criteria.iter().map(|c| c["weight"].as_f64().unwrap()).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_compare() {
    let addr = spawn_server().await;
    let (status, body) = post_compare(
        addr,
        json!({
            "patternIds": ["monolithic", "microservices", "serverless"],
            "projectContext": { "teamSize": "small", "budget": "low" }
        }),
    )
    .await;

    assert_eq!(status, 200, "body: {}", body);
    let patterns = body["patterns"].as_array().unwrap();
    assert_eq!(patterns.len(), 3);
    assert_eq!(patterns[0]["id"], "microservices");
    assert_eq!(body["recommendation"]["best"]["id"], "microservices");
    assert_eq!(
        body["recommendation"]["alternatives"].as_array().unwrap().len(),
        2
    );
    // Omitted context fields default to medium.
    assert_eq!(body["projectContext"]["timeline"], "medium");
}

#[tokio::test]
async fn test_compare_single_id_is_bad_request() {
    let addr = spawn_server().await;
    let (status, body) = post_compare(addr, json!({ "patternIds": ["monolithic"] })).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn test_compare_missing_id_is_not_found() {
    let addr = spawn_server().await;
    let (status, body) =
        post_compare(addr, json!({ "patternIds": ["monolithic", "ghost", "phantom"] })).await;
    assert_eq!(status, 404);
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("ghost"));
    assert!(message.contains("phantom"));
}

#[tokio::test]
async fn test_compare_malformed_body() {
    let addr = spawn_server().await;
    let (status, body) = post_compare(addr, json!({ "ids": 3 })).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "bad_request");
}
