/*!
Query-side components: splitting the raw query into literal terms,
resolving the term sequence against the index, and weighting the
resolved documents.
*/

mod phrase_resolver;
mod tfidf;

pub use self::phrase_resolver::resolve_phrase;
pub use self::tfidf::TfIdfWeight;

/// Splits a raw query on the literal space character.
///
/// No normalization happens here: case, punctuation and diacritics are kept
/// verbatim, and consecutive, leading or trailing spaces produce empty
/// terms. An empty term has no postings, so such a query matches nothing,
/// which makes the "looseness" of the query text visible to the caller
/// instead of being silently repaired.
pub fn split_query(query: &str) -> Vec<&str> {
    query.split(' ').collect()
}
