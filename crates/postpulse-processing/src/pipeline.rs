use std::sync::Arc;

use postpulse_client::PostSource;
use postpulse_store::ResultStore;

use crate::analysis::Analyzer;
use crate::model::{utc_timestamp, PipelineResult, ProcessedItem};
use crate::notify::Notifier;

pub const DEFAULT_FETCH_LIMIT: usize = 3;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub fetch_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fetch_limit: DEFAULT_FETCH_LIMIT,
        }
    }
}

/// Sequences fetch -> analyze -> persist -> notify for one request.
///
/// Every stage is a recoverable-failure boundary: faults become entries in
/// `errors` or boolean flags, never a failed run.
pub struct ProcessingPipeline {
    source: Arc<dyn PostSource>,
    store: Arc<dyn ResultStore>,
    notifier: Arc<dyn Notifier>,
    analyzer: Box<dyn Analyzer>,
    config: PipelineConfig,
}

impl ProcessingPipeline {
    pub fn new(
        source: Arc<dyn PostSource>,
        store: Arc<dyn ResultStore>,
        notifier: Arc<dyn Notifier>,
        analyzer: Box<dyn Analyzer>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            source,
            store,
            notifier,
            analyzer,
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub async fn run(&mut self, destination: &str) -> PipelineResult {
        let mut errors = Vec::new();

        // 1. fetch; an upstream failure yields an empty batch plus one error
        let posts = match self.source.fetch_posts(self.config.fetch_limit).await {
            Ok(posts) => posts,
            Err(err) => {
                tracing::warn!("fetch failed: {err}");
                errors.push(err.to_string());
                Vec::new()
            }
        };

        // 2. analyze each post; a failed item is skipped, not fatal
        let mut items = Vec::with_capacity(posts.len());
        for post in &posts {
            match self.analyzer.analyze(&post.body) {
                Ok(analysis) => items.push(ProcessedItem {
                    original: post.body.clone(),
                    analysis: analysis.text,
                    sentiment: analysis.sentiment,
                    stored: true,
                    timestamp: utc_timestamp(),
                }),
                Err(err) => {
                    tracing::warn!("analysis failed: {err}");
                    errors.push(err.to_string());
                    continue;
                }
            }
        }

        // 3. persist; the outcome is not part of the response contract
        if !self.persist(&items).await {
            tracing::warn!("pipeline output was not persisted");
        }

        // 4. notify
        let notification_sent = match self.notifier.notify(destination) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("notification failed: {err}");
                false
            }
        };

        tracing::info!(
            items = items.len(),
            errors = errors.len(),
            notification_sent,
            "pipeline run complete"
        );

        PipelineResult {
            items,
            notification_sent,
            processed_at: utc_timestamp(),
            errors,
        }
    }

    async fn persist(&self, items: &[ProcessedItem]) -> bool {
        let value = match serde_json::to_value(items) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("serializing items failed: {err}");
                return false;
            }
        };
        match self.store.put_json(&value).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("storing items failed: {err}");
                false
            }
        }
    }
}
