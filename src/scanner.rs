//! Log folder scanning and the per-line counting pipeline
//!
//! One-shot batch scan: every `.log`/`.tsv` file directly inside the
//! folder is read line by line, sequentially. Each file handle is
//! scoped to its own iteration. Unreadable entries are skipped with a
//! warning; only a failure to open the folder itself is fatal.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::extract::{Method, RequestExtractor};
use crate::normalize::IdNormalizer;
use crate::stats::EndpointTracker;

/// File name suffixes recognized as log files
const LOG_EXTENSIONS: [&str; 2] = [".log", ".tsv"];

/// Configuration for a single scan run
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Folder containing the exported log files
    pub log_folder: PathBuf,
    /// Service marker substring; lines without it are skipped entirely
    pub marker: String,
    /// HTTP methods recognized in request lines
    pub methods: Vec<Method>,
}

/// Fatal scan errors
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read log folder {folder}: {source}")]
    Folder {
        folder: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Marker filter, extractor and normalizer applied to each line
#[derive(Debug)]
pub struct LinePipeline {
    marker: String,
    extractor: RequestExtractor,
    normalizer: IdNormalizer,
}

impl LinePipeline {
    /// Build the pipeline for the given marker and method set
    pub fn new(marker: &str, methods: &[Method]) -> Self {
        Self {
            marker: marker.to_string(),
            extractor: RequestExtractor::new(methods),
            normalizer: IdNormalizer::new(),
        }
    }

    /// Process one log line, incrementing the tracker when the line
    /// carries the marker and an extractable request
    pub fn process(&self, line: &str, tracker: &mut EndpointTracker) {
        if !line.contains(&self.marker) {
            return;
        }
        let Some(request) = self.extractor.extract(line) else {
            return;
        };
        let normalized = self.normalizer.normalize(&request.path);
        tracker.record(&format!("{} {}", request.method, normalized));
    }
}

fn has_log_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| LOG_EXTENSIONS.iter().any(|ext| name.ends_with(ext)))
}

/// Scan every log file in the configured folder and aggregate endpoint
/// counts.
///
/// Counting is commutative, so the (platform-dependent) directory
/// iteration order does not affect the totals.
pub fn scan_log_folder(config: &ScanConfig) -> Result<EndpointTracker, ScanError> {
    let entries = std::fs::read_dir(&config.log_folder).map_err(|source| ScanError::Folder {
        folder: config.log_folder.clone(),
        source,
    })?;

    let pipeline = LinePipeline::new(&config.marker, &config.methods);
    let mut tracker = EndpointTracker::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable directory entry: {e}");
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() || !has_log_extension(&path) {
            continue;
        }
        scan_file(&path, &pipeline, &mut tracker);
    }

    Ok(tracker)
}

/// Read one log file line by line through the pipeline. Open and read
/// errors skip the file (or its remainder); they are never fatal.
fn scan_file(path: &Path, pipeline: &LinePipeline, tracker: &mut EndpointTracker) {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!("skipping unreadable file {}: {e}", path.display());
            return;
        }
    };
    debug!("scanning {}", path.display());

    for line in BufReader::new(file).lines() {
        match line {
            Ok(line) => pipeline.process(&line, tracker),
            Err(e) => {
                warn!("read error in {}: {e}; skipping rest of file", path.display());
                break;
            }
        }
    }
}
