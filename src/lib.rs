#![cfg_attr(all(feature = "unstable", test), feature(test))]
#![warn(missing_docs)]

//! # phrasal
//!
//! A phrase-aware, literal-matching text search core.
//!
//! `phrasal` resolves a multi-term query into the set of documents in which
//! the terms occur at strictly consecutive positions, then ranks those
//! documents with a tf-idf score normalized by a precomputed per-document
//! magnitude.
//!
//! Posting lists come from an [`Index`] collaborator built elsewhere; the
//! bundled [`RamIndex`] is a small in-memory implementation meant for tests
//! and demos.
//!
//! ```rust
//! use phrasal::{LiteralSearcher, RamIndex};
//!
//! # fn main() -> phrasal::Result<()> {
//! let mut builder = RamIndex::builder();
//! builder.add_document("moby.txt", "call me ishmael");
//! builder.add_document("sea.txt", "the sea was calm");
//! builder.add_document("log.txt", "call me maybe call me");
//! let index = builder.build();
//!
//! let mut searcher = LiteralSearcher::new();
//! searcher.build(&index);
//!
//! // "call me" appears twice in log.txt and once in moby.txt.
//! let results = searcher.search("call me")?;
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].doc, 2);
//! # Ok(())
//! # }
//! ```

#[cfg(all(test, feature = "unstable"))]
extern crate test;

pub mod collector;
mod error;
pub mod index;
pub mod postings;
pub mod query;
mod searcher;

pub use self::collector::ScoredDocument;
pub use self::error::PhrasalError;
pub use self::index::{DocumentMeta, Index, RamIndex};
pub use self::searcher::LiteralSearcher;

/// A `u32` identifying a document within the index.
pub type DocId = u32;

/// A `f32` expressing how relevant a document is to a query.
pub type Score = f32;

/// `Result` alias over the library's error type.
pub type Result<T> = std::result::Result<T, PhrasalError>;

/// Asserts that two floating-point expressions are within `epsilon`
/// (`0.0005` by default) of one another.
#[macro_export]
macro_rules! assert_nearly_equals {
    ($left:expr, $right:expr) => {
        $crate::assert_nearly_equals!($left, $right, 0.0005)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let (left_val, right_val, epsilon_val): (f32, f32, f32) = ($left, $right, $epsilon);
        let diff = (left_val - right_val).abs();
        assert!(
            diff <= epsilon_val,
            "assertion failed: `(left ~= right)`\n  left: `{left_val:?}`,\n right: `{right_val:?}`,\n  diff: `{diff:?}`,\n  epsilon: `{epsilon_val:?}`"
        );
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_nearly_equals() {
        assert_nearly_equals!(1.0, 1.0004);
        assert_nearly_equals!(0.5, 0.52, 0.05);
    }

    #[test]
    #[should_panic]
    fn test_assert_nearly_equals_panics_beyond_epsilon() {
        assert_nearly_equals!(1.0, 1.1);
    }
}
