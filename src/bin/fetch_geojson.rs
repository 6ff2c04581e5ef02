//! Download the India state boundary file into `GEOJSON_PATH`.

use gsdp_api::{config::Config, infrastructure::geography::geojson_store::GeoJsonStore};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.geojson_source_url.clone());

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?;
    let store = GeoJsonStore::new(&config.geojson_path);
    store.fetch(&client, &url).await?;

    tracing::info!(path = %store.path().display(), "GeoJSON boundary file ready");
    Ok(())
}
