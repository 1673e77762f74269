//! Logtally - Endpoint-usage counter for proxy access logs
//!
//! This library provides the core functionality for aggregating request
//! counts by logical endpoint from HAProxy-style access logs, with
//! identifier normalization so that high-cardinality path segments
//! (database ids, hex blobs, proprietary reference codes) collapse into
//! a single aggregation key.

pub mod cli;
pub mod csv_output;
pub mod extract;
pub mod json_output;
pub mod normalize;
pub mod scanner;
pub mod stats;
