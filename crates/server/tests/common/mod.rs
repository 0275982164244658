use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use shared_types::AdvisorConfig;
use tower::ServiceExt;

pub const STUB_KEY: &str = "test-key";

/// Router with the operational routes the app merges into its server.
pub fn test_app() -> Router {
    server::health::health_router()
}

/// Helper to make a GET request and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// How the stub Gemini endpoint should answer.
#[derive(Clone, Copy)]
#[allow(dead_code)]
pub enum StubReply {
    /// Echo the prompt back as two text parts.
    Echo,
    /// Respond 503 with an error body.
    Unavailable,
    /// Respond 200 with no candidates.
    Empty,
}

async fn stub_generate(reply: StubReply, headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some(STUB_KEY) {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({"error": {"message": "API key not valid"}})),
        );
    }
    match reply {
        StubReply::Echo => {
            let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap_or("");
            let system = body["systemInstruction"]["parts"][0]["text"].as_str().unwrap_or("");
            (
                StatusCode::OK,
                Json(json!({
                    "candidates": [{
                        "content": {"parts": [
                            {"text": format!("system:{}|", !system.is_empty())},
                            {"text": format!("prompt:{prompt}")}
                        ]}
                    }]
                })),
            )
        }
        StubReply::Unavailable => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"error": {"message": "overloaded"}})),
        ),
        StubReply::Empty => (StatusCode::OK, Json(json!({"candidates": []}))),
    }
}

/// Serve a fake `generateContent` endpoint on an ephemeral port and return
/// an advisor config pointing at it.
pub async fn spawn_gemini_stub(reply: StubReply) -> AdvisorConfig {
    let config = AdvisorConfig {
        base_url: String::new(),
        ..AdvisorConfig::default()
    };
    let path = format!("/v1beta/models/{}:generateContent", config.model);
    let app = Router::new().route(
        &path,
        post(move |headers: HeaderMap, body: Json<Value>| stub_generate(reply, headers, body)),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    AdvisorConfig {
        base_url: format!("http://{addr}"),
        ..config
    }
}
