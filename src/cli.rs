//! CLI argument parsing for Logtally

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::extract::Method;

/// How the endpoint report is rendered on stdout
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated `count \t endpoint` lines (default)
    Text,
    /// JSON report with totals, for piping into other tools
    Json,
    /// CSV rows with a `count,endpoint` header
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "logtally")]
#[command(version)]
#[command(about = "Count proxy requests per normalized endpoint", long_about = None)]
pub struct Cli {
    /// Folder containing exported access logs (.log / .tsv files)
    #[arg(value_name = "LOG_FOLDER", default_value = "./log")]
    pub log_folder: PathBuf,

    /// Service marker substring; only lines containing it are counted
    /// (e.g. -m service_cocs)
    #[arg(short = 'm', long = "marker", value_name = "SUBSTR")]
    pub marker: String,

    /// HTTP methods to recognize in request lines
    #[arg(
        long = "methods",
        value_enum,
        value_delimiter = ',',
        default_values_t = Method::all()
    )]
    pub methods: Vec<Method>,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
