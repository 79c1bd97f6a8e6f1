use crate::analyzer::link_matcher::explain_product_link;
use crate::model::{CatalogItem, MatchReport};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

/// Verdict for one candidate URL.
#[derive(Debug, Clone, Serialize)]
pub struct LinkVerdict {
    pub candidate_url: String,
    pub report: MatchReport,
}

impl LinkVerdict {
    pub fn is_product_link(&self) -> bool {
        self.report.is_match()
    }
}

/// All verdicts gathered for one catalog item.
#[derive(Debug, Clone, Serialize)]
pub struct ItemReport {
    pub product_id: u64,
    pub base_link: String,
    pub verdicts: Vec<LinkVerdict>,
}

impl ItemReport {
    pub fn match_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.is_product_link()).count()
    }
}

/// Totals for a whole catalog run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub items_checked: usize,
    pub links_checked: usize,
    pub product_links: usize,
    pub expected_matches: Option<usize>,
    /// True when no expectation was given or it was met exactly.
    pub finished: bool,
}

impl BatchSummary {
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// Trait defining the interface for a catalog reconciler.
pub trait Reconciler {
    fn check_item(&self, item: &CatalogItem) -> ItemReport;
    fn summarize(
        &self,
        reports: &[ItemReport],
        expected: Option<usize>,
        started_at: DateTime<Utc>,
    ) -> BatchSummary;
}

/// Implementation of the catalog reconciler.
pub struct ReconcilerImpl;

impl ReconcilerImpl {
    pub fn new() -> Self {
        Self
    }

    /// Async wrapper over [`Reconciler::check_item`]. It never yields, so
    /// joined items still run one after another; it only gives callers a
    /// future to join alongside other work.
    pub async fn reconcile_item(&self, item: &CatalogItem) -> ItemReport {
        self.check_item(item)
    }
}

impl Default for ReconcilerImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl Reconciler for ReconcilerImpl {
    /// Tests every candidate URL of the item against its reference product.
    fn check_item(&self, item: &CatalogItem) -> ItemReport {
        let product = &item.product;
        debug!(
            "Checking {} links for product {} ({})",
            item.urls_to_check.len(),
            product.id,
            product.canonical_link
        );

        let verdicts = item
            .urls_to_check
            .iter()
            .map(|url| LinkVerdict {
                candidate_url: url.clone(),
                report: explain_product_link(product, url),
            })
            .collect();

        let report = ItemReport {
            product_id: product.id,
            base_link: product.canonical_link.clone(),
            verdicts,
        };
        info!(
            "Product {}: {} of {} links recognized",
            report.product_id,
            report.match_count(),
            report.verdicts.len()
        );
        report
    }

    /// Aggregates per-item reports into a run summary.
    fn summarize(
        &self,
        reports: &[ItemReport],
        expected: Option<usize>,
        started_at: DateTime<Utc>,
    ) -> BatchSummary {
        let product_links: usize = reports.iter().map(ItemReport::match_count).sum();
        let links_checked: usize = reports.iter().map(|r| r.verdicts.len()).sum();

        BatchSummary {
            started_at,
            finished_at: Utc::now(),
            items_checked: reports.len(),
            links_checked,
            product_links,
            expected_matches: expected,
            finished: expected.is_none_or(|e| e == product_links),
        }
    }
}
