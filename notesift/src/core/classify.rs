// src/core/classify.rs
use crate::models::{Classification, Note};
use crate::utils::{comment_mentions, matches_keyword};

/// Note types produced by the scraper for entries it could not capture.
const SKIPPED_TYPES: [&str; 2] = ["skipped_timestamp", "video"];

/// Keys that carry scraper bookkeeping rather than note content.
const METADATA_KEYS: [&str; 2] = ["list_view_content_desc", "scraped_at"];

/// Applies the skip rules to one note. The first matching rule wins:
///
/// 1. A `skipped_timestamp` or `video` entry is skipped.
/// 2. An entry whose only keys are scraper metadata is skipped as a
///    placeholder.
/// 3. With a keyword, the note is kept only when the keyword appears
///    (case-insensitively) in the title, the body, or any comment at any
///    depth.
/// 4. Without a keyword, the note is kept.
///
/// Total over sparse records: missing fields read as empty.
#[must_use]
pub fn classify_note(note: &Note, keyword: Option<&str>) -> Classification {
    if SKIPPED_TYPES.contains(&note.kind_text()) {
        return Classification::SKIP;
    }

    if is_placeholder(note) {
        return Classification::PLACEHOLDER;
    }

    if let Some(keyword) = keyword {
        let keyword_lower = keyword.to_lowercase();
        let mentioned = matches_keyword(note.title_text(), &keyword_lower)
            || matches_keyword(note.body_text(), &keyword_lower)
            || note
                .top_comments()
                .iter()
                .any(|comment| comment_mentions(comment, &keyword_lower));
        if mentioned {
            return Classification::KEEP;
        }
        return Classification::SKIP;
    }

    Classification::KEEP
}

/// True when the note carries no keys beyond the scraper metadata ones.
fn is_placeholder(note: &Note) -> bool {
    note.kind.is_none()
        && note.title.is_none()
        && note.body.is_none()
        && note.comments.is_none()
        && note
            .extra
            .keys()
            .all(|key| METADATA_KEYS.contains(&key.as_str()))
}
