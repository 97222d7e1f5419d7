// src/core/filter.rs
use crate::core::classify::classify_note;
use crate::core::flatten::flatten_comments;
use crate::models::{FilteredNote, Note};

/// Applies the skip rules to a note list and rebuilds every kept note with
/// a flattened comment list, preserving input order. The input is never
/// mutated; kept notes are fresh records.
///
/// Comment-field handling mirrors the export writer: a note that had
/// comments but lost all of them to filtering is emitted without the
/// `comments` field; a note whose input list was already empty keeps the
/// empty list; a note with no `comments` field stays without one.
#[must_use]
pub fn filter_notes(notes: &[Note], keyword: Option<&str>) -> Vec<FilteredNote> {
    notes
        .iter()
        .filter(|note| !classify_note(note, keyword).skip)
        .map(filtered_copy)
        .collect()
}

fn filtered_copy(note: &Note) -> FilteredNote {
    let comments = match note.comments.as_deref() {
        None => None,
        Some([]) => Some(Vec::new()),
        Some(comments) => {
            let flat = flatten_comments(comments);
            if flat.is_empty() { None } else { Some(flat) }
        }
    };

    FilteredNote {
        kind: note.kind.clone(),
        title: note.title.clone(),
        body: note.body.clone(),
        comments,
        extra: note.extra.clone(),
    }
}
