/*!
Defines how the documents matching a search query should be collected
and ordered.
*/

mod top_collector;

pub use self::top_collector::{ScoredDocument, TopCollector};
