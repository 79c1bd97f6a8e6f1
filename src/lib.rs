//! Recognizes whether a URL points at a known catalog product using only the
//! structure of the URL itself.
//!
//! The core is two pure functions: [`segment`] and [`is_product_link`].

pub mod analyzer;
pub mod config;
pub mod model;
pub mod normalizer;
pub mod notifier;
pub mod parser;

pub use analyzer::{explain_product_link, is_product_link};
pub use model::{MatchReport, MatchStage, ReferenceProduct, SegmentSet};
pub use parser::segment;
