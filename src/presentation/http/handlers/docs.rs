use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "India GSDP Map API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/health": { "get": { "summary": "Health check" } },
            "/api/data/geojson": { "get": { "summary": "India state boundaries (GeoJSON)" } },
            "/api/data/gsdp/years": { "get": { "summary": "Available GSDP year labels in source column order" } },
            "/api/data/gsdp/{year}": { "get": { "summary": "GSDP records for a year label; a prefix such as 2017 matches 2017-18" } },
            "/api/tags": { "post": { "summary": "Add a tag to a state" } },
            "/api/tags/{stateCode}": { "get": { "summary": "Tags for a state, most upvoted first" } },
            "/api/tags/upvote/{tagId}": { "put": { "summary": "Upvote a tag" } },
            "/api/docs": { "get": { "summary": "OpenAPI summary" } }
        }
    }))
}
