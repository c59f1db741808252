use std::sync::Arc;
use std::time::Duration;

use postpulse_client::{FetchError, HttpPostSource, SourceConfig, DEFAULT_TIMEOUT_SECS};
use postpulse_processing::{
    ConsoleNotifier, MockAnalyzer, PipelineConfig, ProcessingPipeline,
};
use postpulse_store::JsonFileStore;
use tokio::sync::Mutex;

/// Shared handler state. One request at a time holds the pipeline lock.
pub struct AppState {
    pub pipeline: Mutex<ProcessingPipeline>,
}

impl AppState {
    /// Wires the production collaborators: HTTP source, JSON file store,
    /// console notifier, entropy-seeded analyzer.
    pub fn new(
        source_url: &str,
        fetch_limit: usize,
        output_path: &str,
    ) -> Result<Arc<Self>, FetchError> {
        let source = HttpPostSource::new(SourceConfig {
            base_url: source_url.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })?;

        let pipeline = ProcessingPipeline::new(
            Arc::new(source),
            Arc::new(JsonFileStore::new(output_path)),
            Arc::new(ConsoleNotifier),
            Box::new(MockAnalyzer::from_entropy()),
            PipelineConfig { fetch_limit },
        );

        Ok(Self::with_pipeline(pipeline))
    }

    pub fn with_pipeline(pipeline: ProcessingPipeline) -> Arc<Self> {
        Arc::new(Self {
            pipeline: Mutex::new(pipeline),
        })
    }
}
