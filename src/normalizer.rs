// Text normalization shared by the segmenter and the matcher

/// Lower-cases a title and replaces every whitespace run with a single dash,
/// so that it can be searched for inside a URL slug. Runs at either end are
/// kept as dashes too.
pub fn normalize_title(title: &str) -> String {
    let mut normalized = String::with_capacity(title.len());
    let mut in_whitespace = false;

    for c in title.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                normalized.push('-');
            }
            in_whitespace = true;
        } else {
            normalized.push(c);
            in_whitespace = false;
        }
    }

    normalized
}

/// Removes every path separator from a captured URL component.
pub fn normalize_capture(capture: &str) -> String {
    capture.replace('/', "")
}
