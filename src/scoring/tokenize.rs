/// Minimum token length kept by [`tokens`]; shorter words are dropped.
pub const MIN_TOKEN_LEN: usize = 3;

/// Lowercases `text`, drops every character that is neither an ASCII letter
/// nor whitespace, and splits on whitespace. Removed characters join their
/// neighbours, so `"don't"` yields `"dont"`.
pub fn words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for ch in text.to_lowercase().chars() {
        if ch.is_ascii_alphabetic() {
            current.push(ch);
        } else if is_separator(ch) && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// [`words`] restricted to tokens of at least [`MIN_TOKEN_LEN`] letters.
pub fn tokens(text: &str) -> Vec<String> {
    words(text)
        .into_iter()
        .filter(|word| word.len() >= MIN_TOKEN_LEN)
        .collect()
}

// Unicode whitespace plus the ASCII information separators (FS, GS, RS, US),
// which also split words in the reference behaviour.
fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}
