//! Definition of phrasal's error and result.

use thiserror::Error;

/// The library's error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhrasalError {
    /// A query was run on a searcher that was never bound to an index.
    #[error("the searcher is not bound to an index, `build` must be called first")]
    SearcherNotBound,
}
