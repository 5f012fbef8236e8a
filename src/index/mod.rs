pub mod build;
pub mod stats;
pub mod types;

pub use build::{build_index, index_documents, DocumentReader};
pub use types::*;
