use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::Sentiment;

/// Current UTC time as an RFC 3339 string with a trailing `Z`.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// One post after mock analysis, in fetch order within a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedItem {
    pub original: String,
    pub analysis: String,
    pub sentiment: Sentiment,
    pub stored: bool,
    pub timestamp: String,
}

/// Response payload for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResult {
    pub items: Vec<ProcessedItem>,
    pub notification_sent: bool,
    pub processed_at: String,
    pub errors: Vec<String>,
}
