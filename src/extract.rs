//! Request-line extraction from raw log lines
//!
//! A log line carries at most one quoted HTTP request of the form
//! `"GET /some/path HTTP/1.1"`. The extractor finds the first such
//! occurrence, keeping only the method and the path up to the first
//! space or `?` (query strings are never inspected downstream).

use clap::ValueEnum;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// HTTP methods recognized in request lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    /// All recognized methods, in declaration order
    pub fn all() -> Vec<Self> {
        vec![
            Method::Get,
            Method::Post,
            Method::Put,
            Method::Delete,
            Method::Patch,
        ]
    }

    /// The uppercase wire token for this method
    pub fn as_token(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for Method {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "PATCH" => Ok(Method::Patch),
            _ => Err(()),
        }
    }
}

/// A request parsed out of a single log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    pub method: Method,
    /// Raw (still percent-encoded) path, starting with `/`, query excluded
    pub path: String,
}

/// Extracts the first quoted request line matching the recognized methods
#[derive(Debug, Clone)]
pub struct RequestExtractor {
    /// None when the recognized-method set is empty; nothing matches then
    pattern: Option<Regex>,
}

impl RequestExtractor {
    /// Build an extractor for the given method set
    pub fn new(methods: &[Method]) -> Self {
        if methods.is_empty() {
            return Self { pattern: None };
        }
        let alternation = methods
            .iter()
            .map(|m| m.as_token())
            .collect::<Vec<_>>()
            .join("|");
        // The path capture stops at the first space or `?`, so query
        // strings never reach the normalizer.
        let pattern = Regex::new(&format!(r#""({alternation}) (/[^ ?]*)"#))
            .expect("method alternation produces a valid pattern");
        Self {
            pattern: Some(pattern),
        }
    }

    /// Extract the first quoted request from `line`, if any
    pub fn extract(&self, line: &str) -> Option<ParsedRequest> {
        let caps = self.pattern.as_ref()?.captures(line)?;
        // parse::<Method> pins FromStr; ValueEnum also exposes a from_str
        let method = caps[1].parse::<Method>().ok()?;
        Some(ParsedRequest {
            method,
            path: caps[2].to_string(),
        })
    }
}
