// src/core/flatten.rs
use crate::models::{Comment, FlatComment};

/// Flattens a reply tree into a single pre-order list of canonical records:
/// each node appears before its descendants, siblings keep their order, and
/// depth information is discarded.
///
/// A blank node is dropped together with its whole subtree; the walk does
/// not descend into its replies. Note the contrast with strict counting,
/// which keeps walking below blank nodes. The two passes disagree on such
/// trees and must not be unified.
#[must_use]
pub fn flatten_comments(comments: &[Comment]) -> Vec<FlatComment> {
    let mut flat = Vec::new();
    for comment in comments {
        push_subtree(comment, &mut flat);
    }
    flat
}

fn push_subtree(comment: &Comment, flat: &mut Vec<FlatComment>) {
    let text = comment.comment_text.trim();
    if text.is_empty() {
        return;
    }

    flat.push(FlatComment {
        unique_id: comment.unique_id.clone(),
        comment_text: text.to_owned(),
        date_location: comment.date_location.clone(),
    });

    for reply in &comment.sub_comments {
        push_subtree(reply, flat);
    }
}
