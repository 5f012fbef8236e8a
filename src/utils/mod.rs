//! Utility functions and data structures.
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration file in the per-user data directory
//! - [`progress`] - Spinner that compiles away without the `progress` feature
//! - [`tokenizer`] - Token cleaning and line tokenization
//!
//! ## Key Functions
//!
//! ```
//! use boolsearch::utils::{clean_token, gather_tokens};
//!
//! assert_eq!(clean_token("..Hello!").as_deref(), Some("hello"));
//! assert_eq!(clean_token("1337"), None);
//!
//! let tokens = gather_tokens("One fish, two fish!");
//! assert_eq!(tokens.len(), 3);
//! ```

pub mod app_data;
pub mod progress;
pub mod tokenizer;

pub use app_data::*;
pub use tokenizer::*;
