/*!
Postings, also called inverted lists, are the key data structure of
full-text search: for one term, the ascending list of documents it
occurs in, together with the token offsets of every occurrence.
*/

mod intersection;

pub use self::intersection::intersect;

use serde::{Deserialize, Serialize};

use crate::DocId;

/// The occurrences of one term within one document.
///
/// Offsets are 0-based token positions, strictly increasing. During phrase
/// resolution the positions of an intermediate posting are the offsets of the
/// *last* term of the prefix resolved so far.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    term: String,
    doc: DocId,
    positions: Vec<u32>,
}

impl Posting {
    /// Creates a posting for `term` in `doc`.
    ///
    /// `positions` must be non-empty and strictly increasing. This is only
    /// checked in debug builds.
    pub fn new<T: Into<String>>(term: T, doc: DocId, positions: Vec<u32>) -> Posting {
        debug_assert!(
            !positions.is_empty() && positions_strictly_increasing(&positions),
            "positions must be non-empty and strictly increasing, got {positions:?}"
        );
        Posting {
            term: term.into(),
            doc,
            positions,
        }
    }

    /// The literal token this posting records occurrences of.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The document the occurrences belong to.
    #[inline]
    pub fn doc(&self) -> DocId {
        self.doc
    }

    /// Token offsets of the occurrences, strictly increasing.
    pub fn positions(&self) -> &[u32] {
        &self.positions
    }

    /// Number of recorded occurrences.
    #[inline]
    pub fn term_freq(&self) -> u32 {
        self.positions.len() as u32
    }
}

/// A list of postings, sorted by ascending document id, one posting per
/// document.
pub type PostingList = Vec<Posting>;

pub(crate) fn positions_strictly_increasing(positions: &[u32]) -> bool {
    positions.windows(2).all(|pair| pair[0] < pair[1])
}

pub(crate) fn doc_ids_strictly_increasing(postings: &[Posting]) -> bool {
    postings.windows(2).all(|pair| pair[0].doc < pair[1].doc)
}

#[cfg(test)]
mod tests {
    use super::{Posting, doc_ids_strictly_increasing};

    #[test]
    fn test_term_freq() {
        let posting = Posting::new("hello", 3, vec![1, 5, 8]);
        assert_eq!(posting.term(), "hello");
        assert_eq!(posting.doc(), 3);
        assert_eq!(posting.positions(), &[1, 5, 8]);
        assert_eq!(posting.term_freq(), 3);
    }

    #[test]
    fn test_doc_ids_strictly_increasing() {
        let sorted = vec![
            Posting::new("a", 0, vec![0]),
            Posting::new("a", 2, vec![0]),
            Posting::new("a", 5, vec![0]),
        ];
        assert!(doc_ids_strictly_increasing(&sorted));
        let duplicated = vec![Posting::new("a", 2, vec![0]), Posting::new("a", 2, vec![1])];
        assert!(!doc_ids_strictly_increasing(&duplicated));
        assert!(doc_ids_strictly_increasing(&[]));
    }

    #[test]
    fn test_posting_serialization() {
        let posting = Posting::new("cat", 7, vec![4, 9]);
        let json = serde_json::to_string(&posting).unwrap();
        assert_eq!(json, r#"{"term":"cat","doc":7,"positions":[4,9]}"#);
        let back: Posting = serde_json::from_str(&json).unwrap();
        assert_eq!(back, posting);
    }
}
