// notifier/console.rs

use crate::analyzer::{BatchSummary, ItemReport, LinkVerdict};
use crate::config::ReportFormat;
use serde::Serialize;
use tracing::info;

/// Human-readable line for a single candidate link.
pub fn format_verdict(verdict: &LinkVerdict, base_link: &str) -> String {
    let status = if verdict.is_product_link() { "is" } else { "is not" };
    format!(
        "Your requested link {} {} a product link for the base link {}",
        verdict.candidate_url, status, base_link
    )
}

/// Closing line of a run, comparing the result with the expected count.
pub fn format_summary(summary: &BatchSummary) -> String {
    match summary.expected_matches {
        Some(expected) => format!(
            "We finished for this mass of tests? {} [{} of {}]",
            if summary.finished { "yes" } else { "no" },
            summary.product_links,
            expected
        ),
        None => format!(
            "We finished for this mass of tests? yes [{} product links]",
            summary.product_links
        ),
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    items: &'a [ItemReport],
    summary: &'a BatchSummary,
}

/// Whole run as a pretty-printed JSON document.
pub fn render_json(reports: &[ItemReport], summary: &BatchSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        items: reports,
        summary,
    })
}

/// Prints reconciliation results to stdout.
pub struct ConsoleNotifier {
    pub format: ReportFormat,
}

impl ConsoleNotifier {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn notify_item(&self, report: &ItemReport) {
        if self.format != ReportFormat::Text {
            return;
        }
        for verdict in &report.verdicts {
            println!("{}", format_verdict(verdict, &report.base_link));
        }
    }

    pub fn notify_summary(&self, reports: &[ItemReport], summary: &BatchSummary) -> Result<(), serde_json::Error> {
        match self.format {
            ReportFormat::Text => println!("{}", format_summary(summary)),
            ReportFormat::Json => println!("{}", render_json(reports, summary)?),
        }
        info!(
            "Checked {} links across {} products in {} ms",
            summary.links_checked,
            summary.items_checked,
            summary.elapsed().num_milliseconds()
        );
        Ok(())
    }
}
