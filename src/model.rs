// Core structs: ReferenceProduct, SegmentSet, MatchReport
use crate::normalizer::normalize_title;
use crate::parser::segment;
use serde::Serialize;
use thiserror::Error;

/// A catalog entry whose canonical link is treated as ground truth.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceProduct {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub canonical_link: String,
}

impl ReferenceProduct {
    pub fn new(id: u64, title: impl Into<String>, price: f64, canonical_link: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            canonical_link: canonical_link.into(),
        }
    }

    /// Title in slug form, e.g. "Produto de Teste 1" -> "produto-de-teste-1".
    pub fn normalized_title(&self) -> String {
        normalize_title(&self.title)
    }

    pub fn identifier_text(&self) -> String {
        self.id.to_string()
    }

    pub fn reference_segments(&self) -> SegmentSet {
        segment(&self.canonical_link)
    }
}

/// A reference product together with the candidate URLs to test against it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub product: ReferenceProduct,
    pub urls_to_check: Vec<String>,
}

/// Ordered host and path components of a URL, separators stripped.
/// Never holds an empty string or a string containing `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SegmentSet(Vec<String>);

impl SegmentSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn push(&mut self, segment: String) {
        debug_assert!(!segment.is_empty() && !segment.contains('/'));
        self.0.push(segment);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn contains(&self, segment: &str) -> bool {
        self.0.iter().any(|s| s == segment)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a SegmentSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Which stage of the matcher accepted the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
    /// Two or more segments shared verbatim with the canonical link.
    Structural,
    /// Title and id found inside the candidate's segments.
    Lexical,
}

/// Evidence gathered while matching one candidate against one product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub shared_segments: usize,
    pub lexical_hits: usize,
    pub stage: Option<MatchStage>,
}

impl MatchReport {
    pub fn is_match(&self) -> bool {
        self.stage.is_some()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid catalog: {0}")]
    Invalid(String),
}
