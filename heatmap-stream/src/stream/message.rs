use heatmap_core::TimestampMS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Transport envelope for one record.
///
/// Every value in `data` is a string; nested fields hold their JSON text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamMessage {
    /// Assigned by the transport on append, empty before that
    #[serde(default)]
    pub id: String,
    pub stream: String,
    pub timestamp: TimestampMS,
    pub data: BTreeMap<String, String>,
}

impl StreamMessage {
    /// Unsent message stamped with the current time
    pub fn new(stream: impl Into<String>, data: BTreeMap<String, String>) -> Self {
        Self {
            id: String::new(),
            stream: stream.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            data,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.data.get(name).map(String::as_str)
    }
}
