use std::collections::BTreeMap;

use log::warn;
use rustc_hash::FxHashMap;

use super::{DocumentMeta, Index};
use crate::postings::{Posting, PostingList};
use crate::{DocId, Score};

/// An in-memory index with verbatim whitespace tokenization.
///
/// Documents are tokenized by splitting on whitespace, with no lowercasing
/// or stemming: only the exact tokens are searchable. Doc ids are assigned
/// sequentially from 0 in insertion order, and magnitudes default to the
/// Euclidean norm of the document's `1 + ln(tf)` term weights.
///
/// `RamIndex` backs the tests and demos of this crate. Deployments with
/// their own storage implement [`Index`] directly instead.
pub struct RamIndex {
    postings: FxHashMap<String, PostingList>,
    docs: BTreeMap<DocId, StoredDocument>,
}

struct StoredDocument {
    name: String,
    magnitude: Score,
}

impl RamIndex {
    /// Starts building an empty in-memory index.
    pub fn builder() -> RamIndexBuilder {
        RamIndexBuilder::default()
    }
}

impl Index for RamIndex {
    fn term_postings(&self, term: &str) -> PostingList {
        self.postings.get(term).cloned().unwrap_or_default()
    }

    fn num_docs(&self) -> u32 {
        self.docs.len() as u32
    }

    fn magnitude(&self, doc: DocId) -> Score {
        self.docs[&doc].magnitude
    }

    fn doc_ids(&self) -> Vec<DocId> {
        self.docs.keys().copied().collect()
    }

    fn document(&self, doc: DocId) -> Option<DocumentMeta> {
        self.docs.get(&doc).map(|stored| DocumentMeta {
            doc,
            name: stored.name.clone(),
        })
    }
}

/// Builds a [`RamIndex`] document by document.
#[derive(Default)]
pub struct RamIndexBuilder {
    // term -> (doc, offsets) pairs, appended in doc id order.
    occurrences: FxHashMap<String, Vec<(DocId, Vec<u32>)>>,
    names: Vec<String>,
    magnitude_overrides: FxHashMap<DocId, Score>,
}

impl RamIndexBuilder {
    /// Registers a document and returns its id.
    ///
    /// `text` is split on whitespace and every token is recorded verbatim
    /// with its 0-based offset. A document with no tokens is registered but
    /// keeps a zero magnitude and can never match a query.
    pub fn add_document(&mut self, name: &str, text: &str) -> DocId {
        let doc = self.names.len() as DocId;
        self.names.push(name.to_string());
        for (offset, token) in text.split_whitespace().enumerate() {
            let per_doc = self.occurrences.entry(token.to_string()).or_default();
            match per_doc.last_mut() {
                Some((last_doc, positions)) if *last_doc == doc => {
                    positions.push(offset as u32);
                }
                _ => per_doc.push((doc, vec![offset as u32])),
            }
        }
        doc
    }

    /// Overrides the magnitude computed for `doc` at build time.
    ///
    /// Overrides targeting a document that was never added are logged and
    /// ignored.
    pub fn set_magnitude(&mut self, doc: DocId, magnitude: Score) {
        if doc as usize >= self.names.len() {
            warn!("ignoring magnitude override for unknown document {doc}");
            return;
        }
        self.magnitude_overrides.insert(doc, magnitude);
    }

    /// Freezes the builder into a queryable index.
    pub fn build(self) -> RamIndex {
        let RamIndexBuilder {
            occurrences,
            names,
            magnitude_overrides,
        } = self;
        let mut weight_squares: Vec<Score> = vec![0.0; names.len()];
        let mut postings: FxHashMap<String, PostingList> = FxHashMap::default();
        for (term, per_doc) in occurrences {
            let list: PostingList = per_doc
                .into_iter()
                .map(|(doc, positions)| {
                    let weight = 1.0 + (positions.len() as Score).ln();
                    weight_squares[doc as usize] += weight * weight;
                    Posting::new(term.clone(), doc, positions)
                })
                .collect();
            postings.insert(term, list);
        }
        let docs = names
            .into_iter()
            .enumerate()
            .map(|(doc, name)| {
                let doc = doc as DocId;
                let magnitude = magnitude_overrides
                    .get(&doc)
                    .copied()
                    .unwrap_or_else(|| weight_squares[doc as usize].sqrt());
                (doc, StoredDocument { name, magnitude })
            })
            .collect();
        RamIndex { postings, docs }
    }
}
