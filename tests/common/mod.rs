#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    response::Response,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use box_organizer::{
    config::AppConfig,
    state::AppState,
    test_helpers::{test_router, test_state_with},
};

pub struct Harness {
    pub state: Arc<AppState>,
    pub uploads: TempDir,
}

impl Harness {
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    pub async fn with_config(configure: impl FnOnce(&mut AppConfig)) -> Self {
        let uploads = tempfile::tempdir().expect("create upload dir");
        let state = test_state_with(uploads.path(), configure).await;
        Self { state, uploads }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        test_router(&self.state)
            .oneshot(request)
            .await
            .expect("router should respond")
    }

    pub async fn json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.send(request).await;
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should read");
        let json = serde_json::from_slice(&bytes).expect("body should be json");
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.json(
            Request::get(uri)
                .body(Body::empty())
                .expect("request should build"),
        )
        .await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.json(
            Request::delete(uri)
                .body(Body::empty())
                .expect("request should build"),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, payload: Value) -> (StatusCode, Value) {
        self.json(json_request("POST", uri, payload)).await
    }

    pub async fn put_json(&self, uri: &str, payload: Value) -> (StatusCode, Value) {
        self.json(json_request("PUT", uri, payload)).await
    }

    pub async fn create_box(&self, name: &str) -> Value {
        let (status, created) = self
            .post_json("/box/create", serde_json::json!({ "name": name }))
            .await;
        assert_eq!(status, StatusCode::OK, "box create failed: {created}");
        created
    }

    pub async fn create_item(&self, box_id: &str, payload: Value) -> Value {
        let mut body = serde_json::json!({
            "boxId": box_id,
            "imagePath": "uploads/placeholder.png",
        });
        if let (Some(target), Value::Object(extra)) = (body.as_object_mut(), payload) {
            target.extend(extra);
        }
        let (status, created) = self.post_json("/item/create", body).await;
        assert_eq!(status, StatusCode::OK, "item create failed: {created}");
        created
    }
}

pub fn json_request(method: &str, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request should build")
}

pub fn id_of(value: &Value) -> String {
    value["id"]
        .as_str()
        .expect("payload should carry an id")
        .to_string()
}
