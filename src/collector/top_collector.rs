use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::{DocId, Score};

/// One search result: a document and the relevance attributed to it.
///
/// `ScoredDocument` orders by *rank*: descending score, with exact ties
/// broken by ascending doc id. Sorting a slice of results ascending
/// therefore puts the best document first, and the ordering is total even
/// when scores carry infinities (scores are never NaN; `total_cmp` keeps
/// the ordering total regardless).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ScoredDocument {
    /// Identifier of the matching document.
    pub doc: DocId,
    /// Relevance of the document for the query, higher is better.
    pub score: Score,
}

impl ScoredDocument {
    /// Creates a scored document.
    pub fn new(doc: DocId, score: Score) -> ScoredDocument {
        ScoredDocument { doc, score }
    }
}

impl PartialOrd for ScoredDocument {
    fn partial_cmp(&self, other: &ScoredDocument) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredDocument {
    #[inline]
    fn cmp(&self, other: &ScoredDocument) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.doc.cmp(&other.doc))
    }
}

impl PartialEq for ScoredDocument {
    fn eq(&self, other: &ScoredDocument) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredDocument {}

/// Keeps track of the `limit` documents with the best scores.
///
/// The implementation is based on a `BinaryHeap` used as a min-heap through
/// the reversed ordering of [`ScoredDocument`]: the heap's maximum is the
/// worst-ranked retained document, which is the one evicted when a better
/// candidate shows up. Collecting the top `limit` out of `n` documents
/// costs `O(n log limit)`.
pub struct TopCollector {
    limit: usize,
    heap: BinaryHeap<ScoredDocument>,
}

impl TopCollector {
    /// Creates a collector retaining the `limit` best documents.
    ///
    /// # Panics
    ///
    /// The method panics if `limit` is 0.
    pub fn with_limit(limit: usize) -> TopCollector {
        if limit < 1 {
            panic!("Limit must be strictly greater than 0.");
        }
        TopCollector {
            limit,
            heap: BinaryHeap::with_capacity(limit),
        }
    }

    /// Offers one (doc, score) pair to the collector.
    pub fn collect(&mut self, doc: DocId, score: Score) {
        let candidate = ScoredDocument::new(doc, score);
        if self.at_capacity() {
            // The heap's peek is the worst-ranked retained document.
            if let Some(mut worst) = self.heap.peek_mut() {
                if candidate < *worst {
                    *worst = candidate;
                }
            }
        } else {
            self.heap.push(candidate);
        }
    }

    /// Returns true if at least `limit` documents went through the
    /// collector.
    #[inline]
    pub fn at_capacity(&self) -> bool {
        self.heap.len() >= self.limit
    }

    /// Consumes the collector and returns the retained documents, best
    /// first.
    pub fn into_sorted_vec(self) -> Vec<ScoredDocument> {
        let mut documents = self.heap.into_vec();
        documents.sort_unstable();
        documents
    }
}
