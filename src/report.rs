//! Rendering of reconciliation reports.

use clap::ValueEnum;
use verify_core::Report;

/// Line printed when both listings agree
pub const ALL_MATCH: &str = "All objects match!";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One "<key>: <reason>" line per discrepancy
    Text,
    /// The full report as a JSON document
    Json,
}

pub fn render(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn render_text(report: &Report) -> String {
    if report.is_clean() {
        return ALL_MATCH.to_string();
    }
    let mut out = String::from("Missing elements found:");
    for d in &report.discrepancies {
        out.push('\n');
        out.push_str(&d.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use verify_core::{Discrepancy, Reason};

    fn sample() -> Report {
        Report {
            source_entries: 3,
            destination_entries: 3,
            matched: 1,
            discrepancies: vec![
                Discrepancy::new("a", Reason::MissingInDestination),
                Discrepancy::new("c", Reason::ChecksumMismatch),
                Discrepancy::new("d", Reason::MissingInSource),
            ],
        }
    }

    #[test]
    fn test_render_text_clean() {
        let report = Report::default();
        assert_eq!(render(&report, OutputFormat::Text).unwrap(), ALL_MATCH);
    }

    #[test]
    fn test_render_text_discrepancies() {
        let text = render(&sample(), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "Missing elements found:\na: missing in S3\nc: ETag mismatch\nd: missing in Swift"
        );
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["source_entries"], 3);
        assert_eq!(value["matched"], 1);
        assert_eq!(value["discrepancies"][0]["key"], "a");
        assert_eq!(value["discrepancies"][0]["reason"], "missing_in_destination");
        assert_eq!(value["discrepancies"][2]["reason"], "missing_in_source");
    }
}
