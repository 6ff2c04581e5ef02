use super::helpers::{SAMPLE_CSV, assert_status, get, read_json, spawn_app};
use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn years_are_listed_in_column_order() {
    let app = spawn_app(Some(SAMPLE_CSV), None).await;

    let res = get(&app.app, "/api/data/gsdp/years").await;
    assert_status(res.status(), StatusCode::OK);
    let years: Vec<String> = read_json(res).await;

    assert_eq!(years, ["2016-17", "2017-18"]);
}

#[tokio::test]
async fn exact_prefix_and_unknown_year_lookups() {
    let app = spawn_app(Some(SAMPLE_CSV), None).await;
    let expected = json!([{ "sl_no": "1", "state": "Orissa", "state_code": "1", "gsdp": 120000.0 }]);

    let exact: Value = read_json(get(&app.app, "/api/data/gsdp/2016-17").await).await;
    assert_eq!(exact, expected);

    let prefix: Value = read_json(get(&app.app, "/api/data/gsdp/2016").await).await;
    assert_eq!(prefix, expected);

    let res = get(&app.app, "/api/data/gsdp/2020").await;
    assert_status(res.status(), StatusCode::OK);
    let missing: Value = read_json(res).await;
    assert_eq!(missing, json!([]));
}

#[tokio::test]
async fn year_labels_with_suffix_are_percent_decoded() {
    let csv = "Sl. No.,State,2021-22 (P),2022-23 (Q)\n1,Goa,81000,90000\n";
    let app = spawn_app(Some(csv), None).await;

    let records: Value = read_json(get(&app.app, "/api/data/gsdp/2022-23%20(Q)").await).await;
    assert_eq!(records[0]["gsdp"], json!(90000.0));
}

#[tokio::test]
async fn index_is_loaded_lazily_and_kept() {
    let app = spawn_app(Some(SAMPLE_CSV), None).await;
    assert!(!app.gsdp.is_loaded());

    get(&app.app, "/api/data/gsdp/years").await;
    assert!(app.gsdp.is_loaded());

    let before = app.gsdp.load_year_index().await.unwrap();
    get(&app.app, "/api/data/gsdp/2017").await;
    let after = app.gsdp.load_year_index().await.unwrap();
    assert!(std::sync::Arc::ptr_eq(&before, &after));
}

#[tokio::test]
async fn missing_source_is_a_server_error() {
    let app = spawn_app(None, None).await;

    let res = get(&app.app, "/api/data/gsdp/years").await;
    assert_status(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "Data source unavailable");
}

#[tokio::test]
async fn geojson_is_served_from_disk() {
    let geojson = json!({ "type": "FeatureCollection", "features": [] });
    let app = spawn_app(Some(SAMPLE_CSV), Some(&geojson)).await;

    let res = get(&app.app, "/api/data/geojson").await;
    assert_status(res.status(), StatusCode::OK);
    let body: Value = read_json(res).await;
    assert_eq!(body, geojson);
}

#[tokio::test]
async fn missing_geojson_is_not_found() {
    let app = spawn_app(Some(SAMPLE_CSV), None).await;

    let res = get(&app.app, "/api/data/geojson").await;
    assert_status(res.status(), StatusCode::NOT_FOUND);
    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "GeoJSON file not found");
}

#[tokio::test]
async fn health_reports_lazy_index_state() {
    let app = spawn_app(Some(SAMPLE_CSV), None).await;

    let res = get(&app.app, "/health").await;
    assert_status(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    let body: Value = read_json(res).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["gsdp_loaded"], false);
}
