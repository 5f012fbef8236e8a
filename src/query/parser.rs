use crate::utils::clean_token;

/// How a term's documents combine with the result accumulated so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOp {
    /// No prefix: add the term's documents
    Union,
    /// `+term`: keep only documents that also contain the term
    Intersect,
    /// `-term`: drop documents that contain the term
    Difference,
}

impl SetOp {
    /// Operator from the first character of the raw field
    fn from_prefix(raw: &str) -> Self {
        match raw.as_bytes().first() {
            Some(b'+') => SetOp::Intersect,
            Some(b'-') => SetOp::Difference,
            _ => SetOp::Union,
        }
    }
}

/// One space-delimited field of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerm {
    pub op: SetOp,
    /// Cleaned lookup key. Empty when the field has no letters, which
    /// matches nothing.
    pub term: String,
}

/// Parsed query: terms in evaluation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub terms: Vec<QueryTerm>,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Parse a query line.
///
/// The operator is read from the raw field before cleaning strips it.
/// Parsing stops at the first empty field, so a doubled or trailing space
/// ends the query there.
pub fn parse_query(input: &str) -> Query {
    let terms = input
        .split(' ')
        .take_while(|field| !field.is_empty())
        .map(|field| QueryTerm {
            op: SetOp::from_prefix(field),
            term: clean_token(field).unwrap_or_default(),
        })
        .collect();

    Query { terms }
}
