use super::helpers::{SAMPLE_CSV, assert_status, get, read_json, send, spawn_app};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};

async fn post_tag(app: &Router, body: Value) -> axum::response::Response {
    post_tag_raw(app, body.to_string()).await
}

async fn post_tag_raw(app: &Router, body: String) -> axum::response::Response {
    let req = Request::builder()
        .method("POST")
        .uri("/api/tags")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("failed to build create-tag request");
    send(app, req).await
}

async fn upvote(app: &Router, tag_id: &str) -> axum::response::Response {
    let req = Request::builder()
        .method("PUT")
        .uri(format!("/api/tags/upvote/{}", tag_id))
        .body(Body::empty())
        .expect("failed to build upvote request");
    send(app, req).await
}

#[tokio::test]
async fn create_list_and_upvote_tags() {
    let app = spawn_app(Some(SAMPLE_CSV), None).await;

    let res = post_tag(&app.app, json!({ "state_code": "1", "tag_name": "Mining" })).await;
    assert_status(res.status(), StatusCode::CREATED);
    let mining: Value = read_json(res).await;
    assert_eq!(mining["upvotes"], 0);
    assert_eq!(mining["state_code"], "1");

    let res = post_tag(&app.app, json!({ "state_code": "1", "tag_name": "Handloom" })).await;
    let handloom: Value = read_json(res).await;
    let handloom_id = handloom["_id"].as_str().expect("missing tag id");

    let res = upvote(&app.app, handloom_id).await;
    assert_status(res.status(), StatusCode::OK);
    let upvoted: Value = read_json(res).await;
    assert_eq!(upvoted["upvotes"], 1);

    let res = get(&app.app, "/api/tags/1").await;
    assert_status(res.status(), StatusCode::OK);
    let tags: Vec<Value> = read_json(res).await;
    let names: Vec<_> = tags.iter().map(|t| t["tag_name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Handloom", "Mining"]);

    let other: Vec<Value> = read_json(get(&app.app, "/api/tags/2").await).await;
    assert!(other.is_empty());
}

#[tokio::test]
async fn create_requires_state_code_and_tag_name() {
    let app = spawn_app(Some(SAMPLE_CSV), None).await;

    for body in [
        json!({ "state_code": "1" }),
        json!({ "tag_name": "Tourism" }),
        json!({ "state_code": "", "tag_name": "Tourism" }),
    ] {
        let res = post_tag(&app.app, body).await;
        assert_status(res.status(), StatusCode::BAD_REQUEST);
        let payload: Value = read_json(res).await;
        assert_eq!(payload["error"], "State code and tag name are required");
    }
}

#[tokio::test]
async fn create_rejects_undecodable_bodies_as_json_errors() {
    let app = spawn_app(Some(SAMPLE_CSV), None).await;

    for body in [
        json!({ "state_code": 21, "tag_name": "Mining" }).to_string(),
        "not json".to_string(),
    ] {
        let res = post_tag_raw(&app.app, body).await;
        assert_status(res.status(), StatusCode::BAD_REQUEST);
        let payload: Value = read_json(res).await;
        assert_eq!(payload["error"], "State code and tag name are required");
    }

    let tags: Vec<Value> = read_json(get(&app.app, "/api/tags/21").await).await;
    assert!(tags.is_empty());
}

#[tokio::test]
async fn upvote_unknown_or_malformed_id() {
    let app = spawn_app(Some(SAMPLE_CSV), None).await;

    let res = upvote(&app.app, "0194f123-4567-7abc-8def-0123456789ab").await;
    assert_status(res.status(), StatusCode::NOT_FOUND);

    let res = upvote(&app.app, "not-a-uuid").await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
}
