use std::cmp::Ordering;

use super::{Posting, PostingList, doc_ids_strictly_increasing};

/// Intersects two doc-id-sorted posting lists positionally.
///
/// A document survives only if it appears in both lists with at least one
/// occurrence in `curr` placed exactly one offset after an occurrence in
/// `prev`. The surviving posting carries `curr`'s term and the offsets of
/// those continuing occurrences, so the output can be fed back as the `prev`
/// side of the next intersection when resolving a phrase left to right.
///
/// Runs in `O(|curr| log |prev|)` document lookups plus a linear merge of
/// the two position lists of each common document.
pub fn intersect(prev: &[Posting], curr: &[Posting]) -> PostingList {
    debug_assert!(doc_ids_strictly_increasing(prev));
    debug_assert!(doc_ids_strictly_increasing(curr));
    let mut merged = PostingList::new();
    for curr_posting in curr {
        let prev_posting = match prev.binary_search_by_key(&curr_posting.doc(), Posting::doc) {
            Ok(prev_offset) => &prev[prev_offset],
            Err(_) => continue,
        };
        let positions = adjacent_positions(prev_posting.positions(), curr_posting.positions());
        if positions.is_empty() {
            continue;
        }
        merged.push(Posting::new(curr_posting.term(), curr_posting.doc(), positions));
    }
    merged
}

/// Returns the offsets of `curr` that immediately follow an offset of `prev`
/// (that is, every `c` in `curr` such that `c == p + 1` for some `p` in
/// `prev`). Both slices must be sorted ascending.
fn adjacent_positions(prev: &[u32], curr: &[u32]) -> Vec<u32> {
    let mut following = Vec::new();
    let mut prev_index = 0;
    let mut curr_index = 0;
    while prev_index < prev.len() && curr_index < curr.len() {
        let continuation = prev[prev_index] + 1;
        match curr[curr_index].cmp(&continuation) {
            Ordering::Less => {
                curr_index += 1;
            }
            Ordering::Equal => {
                following.push(curr[curr_index]);
                prev_index += 1;
                curr_index += 1;
            }
            Ordering::Greater => {
                prev_index += 1;
            }
        }
    }
    following
}


#[cfg(all(test, feature = "unstable"))]
mod bench {
    use test::Bencher;

    use super::adjacent_positions;

    #[bench]
    fn bench_adjacent_positions(b: &mut Bencher) {
        let prev: Vec<u32> = (0..1000).map(|i| i * 3).collect();
        let curr: Vec<u32> = (0..1000).map(|i| i * 3 + 1).collect();
        b.iter(|| adjacent_positions(&prev, &curr));
    }
}
