// Splits HTTP(S) URLs into host and path segments
use crate::model::SegmentSet;
use crate::normalizer::normalize_capture;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Host, then up to five path segments, then an optional uncaptured
/// query or suffix such as `?utm_source=x` or `/+752+`.
const URL_PATTERN: &str =
    r"(?i)https?://([\w.]+)(/[\w-]*)?(/[\w-]+)?(/[\w-]+)?(/[\w-]+)?(/[\w-]+)?(?:[/?+][\w=+]+)?";

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(URL_PATTERN).expect("URL pattern must compile"));

/// Maximum number of segments a URL can produce: the host plus five path parts.
pub const MAX_SEGMENTS: usize = 6;

/// Splits `url` into its normalized segments.
///
/// Groups are collected in order and collection stops at the first group that
/// did not take part in the match. Anything that is not an HTTP(S) URL gives
/// an empty set.
pub fn segment(url: &str) -> SegmentSet {
    let mut segments = SegmentSet::new();

    let Some(captures) = URL_REGEX.captures(url) else {
        trace!("no URL structure found in {:?}", url);
        return segments;
    };

    for index in 1..=MAX_SEGMENTS {
        let Some(group) = captures.get(index).filter(|m| !m.is_empty()) else {
            break;
        };

        // A bare "/" still counts as a present group but carries no text.
        let normalized = normalize_capture(group.as_str());
        if !normalized.is_empty() {
            segments.push(normalized);
        }
    }

    trace!("segmented {:?} into {:?}", url, segments);
    segments
}
