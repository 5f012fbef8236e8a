use crate::index::types::{DocSet, InvertedIndex};
use crate::query::parser::{parse_query, Query, SetOp};
use tracing::debug;

/// Evaluates parsed queries against a read-only index
pub struct QueryExecutor<'a> {
    index: &'a InvertedIndex,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self { index }
    }

    /// Reduce the query terms left to right into one document set.
    ///
    /// The accumulator starts empty, so a leading `+term` or `-term` yields
    /// the empty set. Unknown terms contribute the empty set.
    pub fn execute(&self, query: &Query) -> DocSet {
        let empty = DocSet::new();
        let mut result = DocSet::new();

        for qt in &query.terms {
            let docs = self.index.get(&qt.term).unwrap_or(&empty);

            result = match qt.op {
                SetOp::Union => result.union(docs).cloned().collect(),
                SetOp::Intersect => result.intersection(docs).cloned().collect(),
                SetOp::Difference => result.difference(docs).cloned().collect(),
            };

            debug!(term = %qt.term, op = ?qt.op, matched = docs.len(), result = result.len(), "query term");
        }

        result
    }
}

/// Parse and evaluate a query line against `index`
pub fn find_query_matches(index: &InvertedIndex, sentence: &str) -> DocSet {
    QueryExecutor::new(index).execute(&parse_query(sentence))
}
