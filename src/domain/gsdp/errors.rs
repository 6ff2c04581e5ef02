use thiserror::Error;

#[derive(Debug, Error)]
pub enum GsdpError {
    /// The tabular source could not be opened or read at all.
    #[error("GSDP source unavailable ({location}): {reason}")]
    SourceUnavailable { location: String, reason: String },

    /// The ingestion task stopped before producing an index.
    #[error("GSDP ingestion aborted: {0}")]
    IngestionAborted(String),
}
