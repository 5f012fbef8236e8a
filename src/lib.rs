//! # boolsearch - Boolean Keyword Search
//!
//! boolsearch builds an in-memory inverted index from a flat text corpus and
//! answers keyword queries with set operators.
//!
//! ## Architecture
//!
//! - [`utils`] - Token cleaning, tokenization, configuration
//! - [`index`] - Corpus reading and inverted index construction
//! - [`query`] - Query parsing and left-to-right set evaluation
//! - [`output`] - Result formatting
//! - [`repl`] - Interactive query loop
//!
//! ## Corpus format
//!
//! Records are two lines each: a document identifier, then the document
//! text. Reading stops at EOF or at the first blank line.
//!
//! ## Queries
//!
//! Terms are separated by single spaces and evaluated left to right against
//! an accumulator that starts empty:
//!
//! - `term` adds the documents containing `term`
//! - `+term` keeps only documents that also contain `term`
//! - `-term` removes documents containing `term`
//!
//! ## Quick Start
//!
//! ```
//! use boolsearch::index::{index_documents, InvertedIndex};
//! use boolsearch::query::find_query_matches;
//! use std::io::Cursor;
//!
//! let corpus = "www.shoppinglist.com\neggs milk fish bread cheese\n\
//!               www.dr.seuss.net\nfish one two red blue\n";
//!
//! let mut index = InvertedIndex::new();
//! let count = index_documents(Cursor::new(corpus), &mut index).unwrap();
//! assert_eq!(count, 2);
//!
//! let results = find_query_matches(&index, "fish -red");
//! assert_eq!(results.into_iter().collect::<Vec<_>>(), vec!["www.shoppinglist.com"]);
//! ```

pub mod index;
pub mod output;
pub mod query;
pub mod repl;
pub mod utils;
