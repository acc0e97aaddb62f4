use crate::index::Index;
use crate::postings::{PostingList, intersect};

/// Resolves a term sequence into the postings of the documents containing
/// the terms as a contiguous phrase, in order.
///
/// Resolution folds [`intersect`] over the terms left to right: the running
/// list starts as the postings of the first term and is narrowed by each
/// following term. The result is doc-id-ascending, and each posting's
/// positions are the offsets of the *last* phrase term, so `term_freq()` is
/// the number of times the full phrase occurs in that document.
///
/// An empty `terms` slice resolves to an empty list, and so does any term
/// without postings (the fold keeps running on empty lists, which costs
/// nothing).
pub fn resolve_phrase<I: Index + ?Sized>(terms: &[&str], index: &I) -> PostingList {
    let (first, rest) = match terms.split_first() {
        Some(first_and_rest) => first_and_rest,
        None => return PostingList::new(),
    };
    let mut resolved = index.term_postings(first);
    for term in rest {
        resolved = intersect(&resolved, &index.term_postings(term));
    }
    resolved
}
