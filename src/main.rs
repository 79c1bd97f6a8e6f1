use chrono::Utc;
use futures::future::join_all;
use link_recognizer::analyzer::{Reconciler, ReconcilerImpl};
use link_recognizer::config::{AppConfig, load_config};
use link_recognizer::notifier::ConsoleNotifier;
use std::process::ExitCode;
use tracing::{error, info, warn};

const DEFAULT_CATALOG: &str = "catalog.json";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CATALOG.to_string());

    // Load catalog from file
    let config: AppConfig = match load_config(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Catalog load error ({}): {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let expected = config.expected_matches;
    let notifier = ConsoleNotifier::new(config.report_format);
    let items = config.into_items();
    info!("Products to process: {}", items.len());

    let reconciler = ReconcilerImpl::new();
    let started_at = Utc::now();

    // Join one future per catalog item; matching never yields, so they complete in order
    let reports = join_all(items.iter().map(|item| reconciler.reconcile_item(item))).await;

    for report in &reports {
        notifier.notify_item(report);
    }

    let summary = reconciler.summarize(&reports, expected, started_at);
    if let Err(e) = notifier.notify_summary(&reports, &summary) {
        error!("Failed to render report: {}", e);
        return ExitCode::FAILURE;
    }

    if summary.finished {
        ExitCode::SUCCESS
    } else {
        warn!(
            "Recognized {} product links, expected {:?}",
            summary.product_links, summary.expected_matches
        );
        ExitCode::FAILURE
    }
}
