//! Processing pipeline: fetch -> analyze -> persist -> notify.

mod analysis;
mod model;
mod notify;
mod pipeline;

pub use analysis::{Analysis, AnalysisError, Analyzer, MockAnalyzer, Sentiment, INSIGHT_POOL};
pub use model::{utc_timestamp, PipelineResult, ProcessedItem};
pub use notify::{ConsoleNotifier, Notifier, NotifyError};
pub use pipeline::{PipelineConfig, ProcessingPipeline, DEFAULT_FETCH_LIMIT};
