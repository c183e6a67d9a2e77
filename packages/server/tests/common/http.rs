//! Request/response helpers driving the router through
//! `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::util::ServiceExt;

async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "PUT", uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, "DELETE", uri, None).await
}
