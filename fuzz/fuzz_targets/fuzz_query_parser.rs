#![no_main]

use boolsearch::index::{Document, InvertedIndex};
use boolsearch::query::{parse_query, QueryExecutor};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (text, query) = data;
    let mut index = InvertedIndex::new();
    index.add_document(&Document::new("doc", text));

    // Every parsed term carries a cleaned key or nothing
    let parsed = parse_query(query);
    for term in &parsed.terms {
        assert_eq!(term.term, term.term.to_ascii_lowercase());
    }

    let result = QueryExecutor::new(&index).execute(&parsed);
    assert!(result.len() <= 1);
});
