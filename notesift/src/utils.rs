// src/utils.rs
use crate::models::Comment;

/// True when the text is empty after trimming surrounding whitespace.
#[inline]
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Case-insensitive substring test. The keyword must already be lowercased.
#[inline]
#[must_use]
pub fn matches_keyword(text: &str, keyword_lower: &str) -> bool {
    text.to_lowercase().contains(keyword_lower)
}

/// True when the comment or any reply below it, at any depth, mentions the
/// keyword. Stops at the first match.
#[must_use]
pub fn comment_mentions(comment: &Comment, keyword_lower: &str) -> bool {
    if matches_keyword(&comment.comment_text, keyword_lower) {
        return true;
    }
    comment
        .sub_comments
        .iter()
        .any(|child| comment_mentions(child, keyword_lower))
}

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| {
        // Don't consider temp directories as hidden
        if s.starts_with(".tmp") {
            return false;
        }
        s.starts_with('.')
    })
}
