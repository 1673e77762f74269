//! JSON output format for the endpoint report

use serde::{Deserialize, Serialize};

use crate::stats::EndpointTracker;

/// A single endpoint with its request count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonEndpoint {
    /// Aggregation key, e.g. `"GET /customers/[id]"`
    pub endpoint: String,
    /// Number of matching requests
    pub count: u64,
}

/// Full report, endpoints in count-descending order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    pub total: u64,
    pub endpoints: Vec<JsonEndpoint>,
}

impl JsonReport {
    /// Build a report from the tracker, preserving its sort order
    pub fn from_tracker(tracker: &EndpointTracker) -> Self {
        Self {
            total: tracker.total(),
            endpoints: tracker
                .sorted()
                .into_iter()
                .map(|(endpoint, count)| JsonEndpoint {
                    endpoint: endpoint.to_string(),
                    count,
                })
                .collect(),
        }
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
