use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::models::Comment;

pub const TOP_KEYWORD_LIMIT: usize = 8;
/// Tokens must be strictly longer than this to count.
pub const MIN_KEYWORD_EXCLUSIVE_LEN: usize = 5;

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "and", "or", "but", "is", "are", "was", "were", "to", "of", "in", "for",
        "with", "on", "at", "by", "this", "that", "it", "i", "you", "he", "she", "they", "we",
        "just", "know",
    ]
    .into_iter()
    .collect()
});

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub word: String,
    pub count: usize,
}

/// Most frequent long words across all comments, ties kept in the order the
/// words were first seen.
pub fn top_keywords(comments: &[Comment]) -> Vec<Keyword> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut tally: Vec<Keyword> = Vec::new();

    for word in comments.iter().flat_map(|comment| tokenize(&comment.text)) {
        match index.get(&word) {
            Some(&slot) => tally[slot].count += 1,
            None => {
                index.insert(word.clone(), tally.len());
                tally.push(Keyword { word, count: 1 });
            }
        }
    }

    // stable: equal counts keep first-seen order
    tally.sort_by(|a, b| b.count.cmp(&a.count));
    tally.truncate(TOP_KEYWORD_LIMIT);
    tally
}

/// Whitespace as regular expressions in the browser see it (`\s`). Differs
/// from `char::is_whitespace` on U+0085 and U+FEFF.
fn is_word_separator(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Lowercases, drops everything except ASCII word characters and whitespace,
/// then keeps tokens longer than five characters that are not stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || c == '_' || is_word_separator(c))
        .collect();

    cleaned
        .split(is_word_separator)
        .filter(|word| word.len() > MIN_KEYWORD_EXCLUSIVE_LEN && !STOP_WORDS.contains(word))
        .map(String::from)
        .collect()
}
