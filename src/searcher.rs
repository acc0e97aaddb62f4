use log::debug;

use crate::collector::{ScoredDocument, TopCollector};
use crate::index::Index;
use crate::postings::PostingList;
use crate::query::{TfIdfWeight, resolve_phrase, split_query};
use crate::{PhrasalError, Result};

/// A literal, phrase-aware searcher over an externally built index.
///
/// The searcher holds nothing but a handle on the index, so it is cheap to
/// create and can be rebound at will. It must be bound with [`build`]
/// before the first query; searching an unbound searcher returns
/// [`PhrasalError::SearcherNotBound`].
///
/// [`build`]: LiteralSearcher::build
pub struct LiteralSearcher<'a, I: Index + ?Sized> {
    index: Option<&'a I>,
}

impl<'a, I: Index + ?Sized> Default for LiteralSearcher<'a, I> {
    fn default() -> LiteralSearcher<'a, I> {
        LiteralSearcher { index: None }
    }
}

impl<'a, I: Index + ?Sized> LiteralSearcher<'a, I> {
    /// Creates a searcher not yet bound to any index.
    pub fn new() -> LiteralSearcher<'a, I> {
        LiteralSearcher::default()
    }

    /// Binds the searcher to a loaded index.
    ///
    /// Rebinding simply replaces the handle; queries in flight are not a
    /// concern since searching takes `&self`.
    pub fn build(&mut self, index: &'a I) {
        self.index = Some(index);
    }

    /// Runs a literal phrase query and returns every matching document,
    /// best first.
    ///
    /// The query is split on single spaces and the resulting terms must
    /// occur contiguously, in order, for a document to match. Results are
    /// sorted by descending score, ties broken by ascending doc id. A query
    /// matching nothing returns an empty vec, not an error.
    pub fn search(&self, query: &str) -> Result<Vec<ScoredDocument>> {
        let (resolved, weight, index) = match self.resolve_with_weight(query)? {
            Some(scorable) => scorable,
            None => return Ok(Vec::new()),
        };
        let mut results: Vec<ScoredDocument> = resolved
            .iter()
            .map(|posting| {
                let score = weight.score(index.magnitude(posting.doc()), posting.term_freq());
                ScoredDocument::new(posting.doc(), score)
            })
            .collect();
        results.sort_unstable();
        Ok(results)
    }

    /// Like [`search`](LiteralSearcher::search), but only keeps the `limit`
    /// best documents, in `O(n log limit)`.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is 0.
    pub fn search_top(&self, query: &str, limit: usize) -> Result<Vec<ScoredDocument>> {
        let mut collector = TopCollector::with_limit(limit);
        let (resolved, weight, index) = match self.resolve_with_weight(query)? {
            Some(scorable) => scorable,
            None => return Ok(Vec::new()),
        };
        for posting in &resolved {
            let score = weight.score(index.magnitude(posting.doc()), posting.term_freq());
            collector.collect(posting.doc(), score);
        }
        Ok(collector.into_sorted_vec())
    }

    /// Resolves a query down to scorable postings, or `None` if nothing
    /// matched. The idf covers the whole phrase: its document frequency is
    /// the length of the resolved list.
    fn resolve_with_weight(
        &self,
        query: &str,
    ) -> Result<Option<(PostingList, TfIdfWeight, &'a I)>> {
        let index = self.index.ok_or(PhrasalError::SearcherNotBound)?;
        let terms = split_query(query);
        let resolved = resolve_phrase(&terms, index);
        debug!(
            "query {query:?}: {} terms, {} matching documents",
            terms.len(),
            resolved.len()
        );
        if resolved.is_empty() {
            return Ok(None);
        }
        let weight = TfIdfWeight::for_phrase(resolved.len() as u32, index.num_docs());
        Ok(Some((resolved, weight, index)))
    }
}

#[cfg(test)]
mod tests {
    use super::LiteralSearcher;
    use crate::PhrasalError;
    use crate::index::RamIndex;

    fn menagerie() -> RamIndex {
        let mut builder = RamIndex::builder();
        builder.add_document("first.txt", "the cat sat on the mat");
        builder.add_document("second.txt", "a cat and a dog");
        builder.add_document("third.txt", "dogs all the way down");
        builder.build()
    }

    #[test]
    fn test_search_before_build_fails() {
        let searcher = LiteralSearcher::<RamIndex>::new();
        assert_eq!(searcher.search("cat"), Err(PhrasalError::SearcherNotBound));
        assert_eq!(
            searcher.search_top("cat", 3),
            Err(PhrasalError::SearcherNotBound)
        );
    }

    #[test]
    fn test_search_returns_sorted_results() {
        let index = menagerie();
        let mut searcher = LiteralSearcher::new();
        searcher.build(&index);
        let results = searcher.search("cat").unwrap();
        assert_eq!(results.len(), 2);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_search_empty_and_unknown_queries() {
        let index = menagerie();
        let mut searcher = LiteralSearcher::new();
        searcher.build(&index);
        assert!(searcher.search("").unwrap().is_empty());
        assert!(searcher.search("axolotl").unwrap().is_empty());
        // The double space introduces an empty term, which matches nothing.
        assert!(searcher.search("cat  sat").unwrap().is_empty());
    }

    #[test]
    fn test_search_is_idempotent() {
        let index = menagerie();
        let mut searcher = LiteralSearcher::new();
        searcher.build(&index);
        assert_eq!(
            searcher.search("the cat").unwrap(),
            searcher.search("the cat").unwrap()
        );
    }

    #[test]
    fn test_search_top_truncates() {
        let index = menagerie();
        let mut searcher = LiteralSearcher::new();
        searcher.build(&index);
        let all = searcher.search("cat").unwrap();
        let top = searcher.search_top("cat", 1).unwrap();
        assert_eq!(top, all[..1]);
        let generous = searcher.search_top("cat", 50).unwrap();
        assert_eq!(generous, all);
    }

    #[test]
    fn test_searcher_over_trait_object() {
        let index = menagerie();
        let mut searcher: LiteralSearcher<dyn crate::Index> = LiteralSearcher::new();
        searcher.build(&index);
        assert_eq!(searcher.search("the cat").unwrap().len(), 1);
    }
}
