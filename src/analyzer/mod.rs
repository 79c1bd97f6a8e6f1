// Analyzer module: the product matcher and the batch reconciler built on it.

pub mod link_matcher;
pub mod reconciler;

// Re-export the main entry points for ease of use.
pub use link_matcher::{explain_product_link, is_product_link};
pub use reconciler::{BatchSummary, ItemReport, LinkVerdict, Reconciler, ReconcilerImpl};
