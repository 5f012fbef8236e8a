pub mod executor;
pub mod parser;

pub use executor::{find_query_matches, QueryExecutor};
pub use parser::{parse_query, Query, QueryTerm, SetOp};
