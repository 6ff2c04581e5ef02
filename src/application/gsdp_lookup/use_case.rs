use crate::application::ingest_gsdp::pipeline::GsdpIngestPipeline;
use crate::domain::gsdp::{
    errors::GsdpError, record::GsdpRecord, source::GsdpSource, year_index::YearIndex,
};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, instrument};

/// Serves GSDP lookups from a year index that is ingested once per process.
///
/// The index is built on the first call that needs it. Concurrent first
/// callers wait on the same ingestion; afterwards reads share the immutable
/// index without locking. A failed ingestion leaves nothing cached, so the
/// next caller starts a fresh attempt.
pub struct GsdpLookupUseCase {
    source: Arc<dyn GsdpSource>,
    pipeline: Arc<GsdpIngestPipeline>,
    index: OnceCell<Arc<YearIndex>>,
}

impl GsdpLookupUseCase {
    pub fn new(source: Arc<dyn GsdpSource>, pipeline: GsdpIngestPipeline) -> Self {
        Self {
            source,
            pipeline: Arc::new(pipeline),
            index: OnceCell::new(),
        }
    }

    pub async fn load_year_index(&self) -> Result<Arc<YearIndex>, GsdpError> {
        let index = self.index.get_or_try_init(|| self.ingest()).await?;
        Ok(Arc::clone(index))
    }

    pub async fn list_years(&self) -> Result<Vec<String>, GsdpError> {
        let index = self.load_year_index().await?;
        Ok(index.years().map(str::to_string).collect())
    }

    /// Records for the best match of `year`; empty when nothing matches.
    pub async fn records_for_year(&self, year: &str) -> Result<Vec<GsdpRecord>, GsdpError> {
        let index = self.load_year_index().await?;
        Ok(index.resolve(year).to_vec())
    }

    pub fn is_loaded(&self) -> bool {
        self.index.initialized()
    }

    /// Drop the cached index so the next lookup ingests again.
    pub fn reset(&mut self) {
        self.index.take();
    }

    #[instrument(skip(self), fields(source = %self.source.location()))]
    async fn ingest(&self) -> Result<Arc<YearIndex>, GsdpError> {
        let source = Arc::clone(&self.source);
        let pipeline = Arc::clone(&self.pipeline);

        let outcome = tokio::task::spawn_blocking(move || {
            let rows = source.read_rows()?;
            Ok::<_, GsdpError>(pipeline.run(&rows))
        })
        .await
        .map_err(|e| GsdpError::IngestionAborted(e.to_string()))??;

        let years: Vec<&str> = outcome.index.years().collect();
        info!(
            years = %years.join(", "),
            rows_read = outcome.stats.rows_read,
            rows_skipped = outcome.stats.rows_skipped,
            cells_dropped = outcome.stats.cells_dropped,
            records = outcome.stats.records_emitted,
            "Processed GSDP data"
        );

        Ok(Arc::new(outcome.index))
    }
}
