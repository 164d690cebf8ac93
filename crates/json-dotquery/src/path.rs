//! Path segmentation and index-segment classification.

/// Splits a raw path into its `.`-delimited segments.
///
/// A path of exactly `"."` or the empty string means "self": it yields no
/// segments, so resolution returns the node it was called on.
pub(crate) fn split(path: &str) -> Vec<&str> {
    if path.is_empty() || path == "." {
        return Vec::new();
    }
    path.split('.').collect()
}

/// Classifies a segment as an array index.
///
/// An index segment is written `[<decimal integer>]`. One leading `[` and one
/// trailing `]` are stripped when present and the remainder must parse as a
/// base-10 integer; anything else is a key segment and yields `None`. Sign is
/// accepted here so that a negative index reaches the bounds check instead of
/// being mistaken for a key.
pub(crate) fn parse_index(segment: &str) -> Option<i64> {
    let inner = segment.strip_prefix('[').unwrap_or(segment);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    inner.parse().ok()
}
