//! CSV output format for the endpoint report

use crate::stats::EndpointTracker;

/// CSV formatter for the endpoint report
#[derive(Debug)]
pub struct CsvOutput<'a> {
    tracker: &'a EndpointTracker,
}

impl<'a> CsvOutput<'a> {
    /// Create a CSV formatter over the given tracker
    pub fn new(tracker: &'a EndpointTracker) -> Self {
        Self { tracker }
    }

    /// Escape a CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Generate CSV output as a string, header included, rows in
    /// count-descending order
    pub fn to_csv(&self) -> String {
        let mut output = String::from("count,endpoint\n");
        for (endpoint, count) in self.tracker.sorted() {
            output.push_str(&count.to_string());
            output.push(',');
            output.push_str(&Self::escape_field(endpoint));
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_header_and_rows() {
        let mut tracker = EndpointTracker::new();
        tracker.record("GET /customers/[id]");
        tracker.record("GET /customers/[id]");
        tracker.record("POST /orders");

        let csv = CsvOutput::new(&tracker).to_csv();
        assert_eq!(
            csv,
            "count,endpoint\n2,GET /customers/[id]\n1,POST /orders\n"
        );
    }

    #[test]
    fn test_csv_empty_tracker() {
        let tracker = EndpointTracker::new();
        assert_eq!(CsvOutput::new(&tracker).to_csv(), "count,endpoint\n");
    }

    #[test]
    fn test_escape_field_with_comma() {
        assert_eq!(
            CsvOutput::escape_field("GET /a,b"),
            "\"GET /a,b\""
        );
    }

    #[test]
    fn test_escape_field_with_quote() {
        assert_eq!(
            CsvOutput::escape_field("GET /say\"hi\""),
            "\"GET /say\"\"hi\"\"\""
        );
    }

    #[test]
    fn test_escape_field_plain() {
        assert_eq!(CsvOutput::escape_field("GET /orders"), "GET /orders");
    }
}
