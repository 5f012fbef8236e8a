use crate::utils::gather_tokens;
use std::collections::{BTreeMap, BTreeSet};

/// Opaque document identifier (URL, filename, ...)
pub type DocId = String;

/// Set of documents, ordered for stable display
pub type DocSet = BTreeSet<DocId>;

/// A single corpus record: identifier line plus text line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocId,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<DocId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Inverted index: term -> documents containing the term.
///
/// A term is present iff at least one indexed document contains it, so an
/// entry never holds an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    terms: BTreeMap<String, DocSet>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a document's tokens into the index
    pub fn add_document(&mut self, doc: &Document) {
        for token in gather_tokens(&doc.text) {
            self.terms.entry(token).or_default().insert(doc.id.clone());
        }
    }

    /// Fold every posting of `other` into this index
    pub fn merge(&mut self, other: InvertedIndex) {
        for (term, docs) in other.terms {
            self.terms.entry(term).or_default().extend(docs);
        }
    }

    /// Documents containing `term`, if it was indexed
    pub fn get(&self, term: &str) -> Option<&DocSet> {
        self.terms.get(term)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Number of unique terms
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in lexicographic order with their document sets
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocSet)> {
        self.terms.iter().map(|(term, docs)| (term.as_str(), docs))
    }

    /// Distinct documents referenced by any term
    pub fn documents(&self) -> DocSet {
        self.terms.values().flatten().cloned().collect()
    }
}

/// Outcome of a build pass, reported to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexSummary {
    pub documents: usize,
    pub terms: usize,
}
