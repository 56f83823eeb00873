//! Locating schema names in JSON source for diagnostics.
//!
//! serde_json only reports positions for syntax errors, so validation errors
//! find their location by searching the source text. A miss yields no span;
//! pointing at the wrong place is worse than pointing nowhere.

use miette::SourceSpan;

/// Every occurrence of `key` used as an object key (`"key"` followed by `:`).
///
/// Spans cover the key without its quotes.
pub(crate) fn find_json_key_spans(src: &str, key: &str) -> Vec<SourceSpan> {
    quoted_occurrences(src, key)
        .filter(|&end| src[end..].trim_start().starts_with(':'))
        .map(|end| SourceSpan::from((end - key.len() - 1, key.len())))
        .collect()
}

/// First occurrence of `key` as an object key at or after `from`.
pub(crate) fn find_json_key_span_after(src: &str, key: &str, from: usize) -> Option<SourceSpan> {
    find_json_key_spans(src, key)
        .into_iter()
        .find(|span| span.offset() >= from)
}

/// First occurrence of `value` as a string value (not a key) at or after
/// `from`.
pub(crate) fn find_json_string_span_after(
    src: &str,
    value: &str,
    from: usize,
) -> Option<SourceSpan> {
    quoted_occurrences(src, value)
        .filter(|&end| !src[end..].trim_start().starts_with(':'))
        .map(|end| SourceSpan::from((end - value.len() - 1, value.len())))
        .find(|span| span.offset() >= from)
}

/// Byte offsets just past the closing quote of each `"needle"` in `src`.
fn quoted_occurrences<'a>(src: &'a str, needle: &str) -> impl Iterator<Item = usize> + 'a {
    let quoted = format!("\"{}\"", needle);
    src.match_indices(&quoted)
        .map(|(pos, m)| pos + m.len())
        .collect::<Vec<_>>()
        .into_iter()
}
