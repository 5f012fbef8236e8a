#![no_main]

use boolsearch::utils::{clean_token, gather_tokens};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Some(token) = clean_token(data) {
        assert!(!token.is_empty());
        assert_eq!(clean_token(&token).as_deref(), Some(token.as_str()));
    }

    for token in gather_tokens(data) {
        assert!(!token.contains(' '));
    }
});
