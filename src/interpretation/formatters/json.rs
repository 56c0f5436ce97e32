use crate::interpretation::types::{DetailProjection, SummaryProjection};

/// JSON formatter for the export and screen views
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format the detail projection as pretty-printed JSON (export)
    pub fn format(detail: &DetailProjection) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(detail)
    }

    /// Format the detail projection as compact JSON (no whitespace)
    pub fn format_compact(detail: &DetailProjection) -> Result<String, serde_json::Error> {
        serde_json::to_string(detail)
    }

    pub fn format_summary(summary: &SummaryProjection) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(summary)
    }
}
