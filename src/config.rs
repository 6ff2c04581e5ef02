//! Application configuration loading from environment variables.
//!
//! All configuration is read once at startup. A `.env` file, when present, is
//! loaded into the environment by `main` before this runs.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `RUST_LOG`: Logging level (default: "info,gsdp_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `GSDP_CSV_PATH`: GSDP table (default: "./data/india_gsdp.csv")
//! - `GSDP_SEQUENCE_COLUMN`: Header of the serial number column (default: "Sl. No.")
//! - `GSDP_STATE_COLUMN`: Header of the state name column (default: "State")
//! - `PRELOAD_GSDP`: Build the year index during startup (default: true)
//! - `GEOJSON_PATH`: State boundary file (default: "./data/india-states.json")
//! - `GEOJSON_SOURCE_URL`: Where `fetch_geojson` downloads the boundary file from
//! - `DATABASE_URL`: PostgreSQL connection string for tags; in-memory tags when unset
//! - `DATABASE_MAX_CONNECTIONS`: DB pool size (default: 5)
//! - `ALLOWED_ORIGINS`: Comma separated CORS origins (default: "http://localhost:5173")

pub const DEFAULT_GEOJSON_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/geohacker/india/master/states/india_state.geojson";

#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Path of the GSDP CSV file
    pub gsdp_csv_path: String,

    pub gsdp_sequence_column: String,

    pub gsdp_state_column: String,

    /// Ingest GSDP data at startup instead of on the first request
    pub preload_gsdp: bool,

    /// Path of the state boundary GeoJSON served to clients
    pub geojson_path: String,

    pub geojson_source_url: String,

    /// PostgreSQL connection string; `None` keeps tags in memory
    pub database_url: Option<String>,

    pub database_max_connections: u32,

    /// Origins allowed by CORS in release builds
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the
    /// expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: env_or(&lookup, "HOST", "0.0.0.0".to_string())?,
            port: env_or(&lookup, "PORT", 3000)?,
            gsdp_csv_path: env_or(&lookup, "GSDP_CSV_PATH", "./data/india_gsdp.csv".to_string())?,
            gsdp_sequence_column: env_or(&lookup, "GSDP_SEQUENCE_COLUMN", "Sl. No.".to_string())?,
            gsdp_state_column: env_or(&lookup, "GSDP_STATE_COLUMN", "State".to_string())?,
            preload_gsdp: env_or(&lookup, "PRELOAD_GSDP", true)?,
            geojson_path: env_or(
                &lookup,
                "GEOJSON_PATH",
                "./data/india-states.json".to_string(),
            )?,
            geojson_source_url: env_or(
                &lookup,
                "GEOJSON_SOURCE_URL",
                DEFAULT_GEOJSON_SOURCE_URL.to_string(),
            )?,
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            database_max_connections: env_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .unwrap_or_else(|| "http://localhost:5173".to_string())
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

/// Load a variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        None => Ok(default),
    }
}
