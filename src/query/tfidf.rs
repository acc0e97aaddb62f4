use crate::Score;

fn idf(doc_freq: u32, doc_count: u32) -> Score {
    assert!(doc_freq > 0, "idf is undefined for an unmatched phrase");
    assert!(doc_count >= doc_freq, "{doc_count} >= {doc_freq}");
    (doc_count as Score / doc_freq as Score).ln()
}

/// The per-query part of the tf-idf score.
///
/// The idf is computed once per query from the document frequency of the
/// *whole resolved phrase*, not per individual term, and is then shared by
/// every scored document. Scoring a document only needs its phrase frequency
/// and its precomputed magnitude.
#[derive(Clone, Debug)]
pub struct TfIdfWeight {
    idf: Score,
}

impl TfIdfWeight {
    /// Builds the weight for a resolved phrase present in `doc_freq` of the
    /// `doc_count` indexed documents.
    ///
    /// # Panics
    ///
    /// Panics if `doc_freq` is 0 or exceeds `doc_count`. Callers are
    /// expected to skip scoring entirely when nothing matched.
    pub fn for_phrase(doc_freq: u32, doc_count: u32) -> TfIdfWeight {
        TfIdfWeight {
            idf: idf(doc_freq, doc_count),
        }
    }

    /// Scores one document given its `magnitude` and the number of phrase
    /// occurrences in it.
    ///
    /// Computes `(1 / magnitude) * (1 + ln(term_freq)) * idf`. A phrase
    /// matching every document gets an idf of 0 and every score collapses
    /// to 0; ordering is then decided by doc id alone.
    #[inline]
    pub fn score(&self, magnitude: Score, term_freq: u32) -> Score {
        (1.0 / magnitude) * self.tf_factor(term_freq) * self.idf
    }

    /// The inverse document frequency this weight was built from.
    pub fn idf(&self) -> Score {
        self.idf
    }

    #[inline]
    fn tf_factor(&self, term_freq: u32) -> Score {
        1.0 + (term_freq as Score).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::{TfIdfWeight, idf};
    use crate::Score;
    use crate::assert_nearly_equals;

    #[test]
    fn test_idf() {
        let score: Score = 2.0;
        assert_nearly_equals!(idf(1, 2), score.ln());
        assert_nearly_equals!(idf(3, 10), (10f32 / 3f32).ln());
    }

    #[test]
    fn test_idf_is_zero_when_phrase_is_everywhere() {
        assert_nearly_equals!(idf(10, 10), 0.0);
        assert_nearly_equals!(TfIdfWeight::for_phrase(10, 10).score(1.5, 7), 0.0);
    }

    #[test]
    #[should_panic]
    fn test_idf_rejects_impossible_doc_freq() {
        idf(3, 2);
    }

    #[test]
    fn test_score_reference_values() {
        // 10 documents, phrase in 3 of them, twice in a document of
        // magnitude 2.
        let weight = TfIdfWeight::for_phrase(3, 10);
        assert_nearly_equals!(weight.score(2.0, 2), 1.0192516, 0.0001);
        // A single occurrence in a document of magnitude 1 scores the
        // raw idf.
        assert_nearly_equals!(weight.score(1.0, 1), weight.idf());
    }

    #[test]
    fn test_score_grows_with_term_freq() {
        let weight = TfIdfWeight::for_phrase(2, 12);
        let mut last = weight.score(2.0, 1);
        for term_freq in 2..16 {
            let next = weight.score(2.0, term_freq);
            assert!(next > last, "term_freq {term_freq} did not increase the score");
            last = next;
        }
    }

    #[test]
    fn test_score_shrinks_with_magnitude() {
        let weight = TfIdfWeight::for_phrase(2, 12);
        assert!(weight.score(1.0, 2) > weight.score(4.0, 2));
    }
}
