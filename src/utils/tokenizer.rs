use std::collections::BTreeSet;

/// Normalize a raw token into a search key.
///
/// The token is lowercased, then leading and trailing ASCII punctuation is
/// trimmed. Punctuation inside the token is kept (`s.back()` -> `s.back`).
/// Tokens without a single letter are not indexable and yield `None`.
pub fn clean_token(raw: &str) -> Option<String> {
    if !raw.bytes().any(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    let lowered = raw.to_ascii_lowercase();
    let trimmed = lowered.trim_matches(|c: char| c.is_ascii_punctuation());

    // A letter always survives trimming
    Some(trimmed.to_string())
}

/// Split a line of text on spaces and collect its cleaned tokens.
pub fn gather_tokens(text: &str) -> BTreeSet<String> {
    text.split(' ')
        .filter(|field| !field.is_empty())
        .filter_map(clean_token)
        .collect()
}
