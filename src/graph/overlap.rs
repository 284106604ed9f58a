//! Exact and error-tolerant overlap tests used while walking the graph.
//!
//! Vertex fuzzy-matching and approximate containment both go through
//! [`is_similar`], so they always share [`SIMILARITY_THRESHOLD`].

/// Identity a pair of windows must strictly exceed to count as similar.
pub const SIMILARITY_THRESHOLD: f64 = 0.85;

/// Fraction of positions at which `a` and `b` carry the same character.
///
/// Intended for equal-length strings. Two empty strings are identical (1.0);
/// if the lengths differ, the surplus positions count as mismatches.
pub fn similarity(a: &str, b: &str) -> f64 {
    byte_similarity(a.as_bytes(), b.as_bytes())
}

fn byte_similarity(a: &[u8], b: &[u8]) -> f64 {
    let len = a.len().max(b.len());
    if len == 0 {
        return 1.0;
    }
    let matches = a.iter().zip(b).filter(|(x, y)| x == y).count();
    matches as f64 / len as f64
}

pub fn is_similar(a: &str, b: &str) -> bool {
    bytes_similar(a.as_bytes(), b.as_bytes())
}

fn bytes_similar(a: &[u8], b: &[u8]) -> bool {
    byte_similarity(a, b) > SIMILARITY_THRESHOLD
}

/// Offset of the first window of `haystack` that is similar to `needle`.
///
/// Slides a `needle.len()` window over `haystack` one position at a time:
/// O(|haystack| · |needle|). `None` when the needle is longer than the
/// haystack.
pub fn find_similar(haystack: &str, needle: &str) -> Option<usize> {
    let n = needle.len();
    if n > haystack.len() {
        return None;
    }
    if n == 0 {
        return Some(0);
    }
    let needle = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(n)
        .position(|window| bytes_similar(window, needle))
}

/// Offset of `read`'s first base past its first occurrence of `label`.
///
/// The read prefix up to this point must already be present in the contig
/// for the read to extend it. `None` if the read does not contain `label`.
pub fn overlap_cutoff(read: &str, label: &str) -> Option<usize> {
    read.find(label).map(|i| i + label.len())
}

/// Exact containment of the read prefix `read[..cutoff]` in `contig`.
pub fn extends_exactly(contig: &str, read: &str, cutoff: usize) -> bool {
    read.get(..cutoff).is_some_and(|prefix| contig.contains(prefix))
}

/// Approximate containment of the read prefix `read[..cutoff]` in `contig`.
pub fn extends_approximately(contig: &str, read: &str, cutoff: usize) -> bool {
    read.get(..cutoff)
        .is_some_and(|prefix| find_similar(contig, prefix).is_some())
}
