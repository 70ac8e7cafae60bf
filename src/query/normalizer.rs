//! Canonical query tokens from raw user input.

/// Normalize typed input: trim, reject blanks. No side effects.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

/// Extract a single query word from selected text.
///
/// A user selecting a multi-word span usually wants the word under the
/// cursor, so when the text contains whitespace this returns the
/// whitespace-delimited token covering the char position `anchor`, or the
/// nearest adjacent token when the anchor falls in a gap or past the end.
/// Single-token input is returned trimmed; blank input yields None.
pub fn word_at(text: &str, anchor: usize) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed.chars().any(char::is_whitespace) {
        return Some(trimmed.to_string());
    }

    // Token spans in char positions of the original (untrimmed) text
    let mut tokens: Vec<(usize, usize, String)> = Vec::new();
    let mut current: Option<(usize, String)> = None;
    for (pos, ch) in text.chars().enumerate() {
        if ch.is_whitespace() {
            if let Some((start, word)) = current.take() {
                tokens.push((start, pos, word));
            }
        } else {
            match current.as_mut() {
                Some((_, word)) => word.push(ch),
                None => current = Some((pos, ch.to_string())),
            }
        }
    }
    if let Some((start, word)) = current {
        tokens.push((start, text.chars().count(), word));
    }

    // Token covering the anchor wins; otherwise the closest one by distance
    // to its span (the token adjacent to the caret).
    tokens
        .iter()
        .find(|(start, end, _)| (*start..*end).contains(&anchor))
        .or_else(|| {
            tokens.iter().min_by_key(|(start, end, _)| {
                if anchor < *start { *start - anchor } else { anchor - *end + 1 }
            })
        })
        .map(|(_, _, word)| word.clone())
}
