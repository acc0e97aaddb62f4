//! The `index` module contains the read-side interface the searcher
//! consumes, and a small in-memory implementation of it.
//!
//! Building and persisting a real index is a separate concern: any store
//! able to hand out positional postings, document counts and magnitudes can
//! implement [`Index`] and be searched as-is.

mod ram_index;

pub use self::ram_index::{RamIndex, RamIndexBuilder};

use serde::{Deserialize, Serialize};

use crate::postings::PostingList;
use crate::{DocId, Score};

/// Presentation metadata attached to one indexed document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Identifier of the document within the index.
    pub doc: DocId,
    /// Human readable name of the document, typically a file path or a
    /// title.
    pub name: String,
}

/// Read access to a positional index.
///
/// Implementations must hand out posting lists sorted by ascending doc id
/// with one posting per document, and a strictly positive magnitude for any
/// document holding at least one indexed token. All methods take `&self`:
/// a bound index is only ever read.
pub trait Index {
    /// The postings of an exact term, doc-id-ascending. Unseen terms yield
    /// an empty list.
    fn term_postings(&self, term: &str) -> PostingList;

    /// Total number of indexed documents.
    fn num_docs(&self) -> u32;

    /// The precomputed normalization constant of `doc`.
    ///
    /// Callers only ask for documents obtained from this index's postings;
    /// implementations may panic on unknown ids.
    fn magnitude(&self, doc: DocId) -> Score;

    /// All known document ids, ascending and duplicate free.
    fn doc_ids(&self) -> Vec<DocId>;

    /// Presentation metadata for `doc`, if known.
    fn document(&self, doc: DocId) -> Option<DocumentMeta>;
}
