// # Basic phrase search
//
// Walks through the three steps of using the crate:
// - build an in-memory index,
// - bind a searcher to it,
// - run literal phrase queries and display the ranked results.

use phrasal::index::Index;
use phrasal::{LiteralSearcher, RamIndex};

fn main() -> phrasal::Result<()> {
    // An index is normally built and loaded elsewhere. The in-memory
    // implementation is enough for a demonstration: three small documents,
    // tokenized on whitespace.
    let mut builder = RamIndex::builder();
    builder.add_document("whale.txt", "the white whale swam before the ship");
    builder.add_document("ship.txt", "the ship sailed on while the white whale dived");
    builder.add_document("calm.txt", "the sea was calm and no whale was seen");
    let index = builder.build();

    let mut searcher = LiteralSearcher::new();
    searcher.build(&index);

    // Terms must appear contiguously and in order: "white whale" matches
    // the first two documents, "purple whale" matches none.
    for query in ["white whale", "the sea", "purple whale"] {
        let results = searcher.search_top(query, 5)?;
        println!("query {query:?}: {} matching documents", results.len());
        for result in &results {
            let name = index
                .document(result.doc)
                .map(|meta| meta.name)
                .unwrap_or_default();
            println!("  {:.3}  {}", result.score, name);
        }
    }
    Ok(())
}
