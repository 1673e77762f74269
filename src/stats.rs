//! Endpoint count tracking and summary output

use std::collections::HashMap;
use std::io::Write;

/// Statistics for a single normalized endpoint
#[derive(Debug, Clone)]
pub struct EndpointStats {
    /// Number of requests observed for this endpoint
    pub count: u64,
    /// Sequence number of the first observation; pins tie-break order
    first_seen: u64,
}

/// Tracks request counts for all normalized endpoints
#[derive(Debug, Default)]
pub struct EndpointTracker {
    /// Map from `"<METHOD> <normalized-path>"` to statistics
    stats: HashMap<String, EndpointStats>,
    next_seq: u64,
}

impl EndpointTracker {
    /// Create a new endpoint tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one request for the given endpoint key
    pub fn record(&mut self, endpoint: &str) {
        let seq = self.next_seq;
        let entry = self
            .stats
            .entry(endpoint.to_string())
            .or_insert(EndpointStats {
                count: 0,
                first_seen: seq,
            });
        if entry.count == 0 {
            self.next_seq += 1;
        }
        entry.count += 1;
    }

    /// Total number of recorded requests across all endpoints
    pub fn total(&self) -> u64 {
        self.stats.values().map(|s| s.count).sum()
    }

    /// True when nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Endpoints with their counts, sorted by count descending.
    ///
    /// Ties are broken by first-seen order, so output is deterministic
    /// for a fixed input.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.stats.iter().collect();
        entries.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        entries
            .into_iter()
            .map(|(endpoint, stats)| (endpoint.as_str(), stats.count))
            .collect()
    }

    /// Write the text summary: one `"<count> \t <endpoint>"` line per
    /// endpoint, count descending.
    pub fn write_summary<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        for (endpoint, count) in self.sorted() {
            writeln!(writer, "{count} \t {endpoint}")?;
        }
        Ok(())
    }
}
