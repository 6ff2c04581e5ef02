use gsdp_api::{
    application::{
        gsdp_lookup::use_case::GsdpLookupUseCase,
        ingest_gsdp::pipeline::{GsdpIngestPipeline, SourceColumns},
        tags::use_case::TagUseCase,
    },
    config::Config,
    domain::tag::repository::TagRepository,
    infrastructure::{
        database::pool::connect_tag_store,
        geography::{geojson_store::GeoJsonStore, state_names::india_state_names},
        repositories::{
            in_memory_tag_repository::InMemoryTagRepository,
            sqlx_tag_repository::SqlxTagRepository,
        },
        sources::csv_source::CsvGsdpSource,
    },
    presentation::http::{routes::create_router, state::AppState},
};
use http::{HeaderValue, Method, header};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // RUST_LOG wins; otherwise our crate at debug, everything else at info
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new("info,gsdp_api=debug,tower_http=debug")
        })
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;

    let tag_repo: Arc<dyn TagRepository> = match &config.database_url {
        Some(url) => {
            let db = connect_tag_store(url, config.database_max_connections).await?;
            Arc::new(SqlxTagRepository::new(db))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, tags are kept in memory only");
            Arc::new(InMemoryTagRepository::new())
        }
    };

    let pipeline = GsdpIngestPipeline::new(
        SourceColumns {
            sequence_number: config.gsdp_sequence_column.clone(),
            state_name: config.gsdp_state_column.clone(),
        },
        india_state_names(),
    );
    let gsdp = Arc::new(GsdpLookupUseCase::new(
        Arc::new(CsvGsdpSource::new(&config.gsdp_csv_path)),
        pipeline,
    ));

    if config.preload_gsdp {
        // A missing file is not fatal here; lookups retry and report it
        if let Err(e) = gsdp.load_year_index().await {
            tracing::warn!(error = %e, "GSDP preload failed");
        }
    }

    let state = AppState {
        gsdp,
        tags: Arc::new(TagUseCase::new(tag_repo)),
        geojson: Arc::new(GeoJsonStore::new(&config.geojson_path)),
    };

    let cors_methods = [Method::GET, Method::POST, Method::PUT, Method::OPTIONS];
    let cors = if cfg!(debug_assertions) {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(cors_methods)
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(cors_methods)
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    };

    let app = create_router(state)
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("GSDP API listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, initiating graceful shutdown");
        }
    }
}
