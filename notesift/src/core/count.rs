// src/core/count.rs
use crate::core::classify::classify_note;
use crate::models::{Comment, CountReport, Note};
use crate::utils::is_blank;

/// Counting policy for one pass over a note list, passed explicitly so the
/// two algorithms stay independently testable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountPolicy {
    /// Count every record present, including blank comments and notes the
    /// skip rules would drop.
    Raw,
    /// Apply the skip rules to notes and ignore blank comments.
    Strict,
}

/// Counts replies nested below the given nodes.
///
/// Raw policy: every node at every depth is counted once, unconditionally.
///
/// Strict policy: a blank node is not counted as an item, and its immediate
/// children are not counted through it, but the walk still descends into its
/// subtree so replies hanging below a deeper non-blank node are found. A
/// non-blank node contributes its immediate child count unconditionally,
/// blank children included, plus the recursion. Whether a node is counted
/// therefore depends on its parent's text, not its own.
#[must_use]
pub fn count_replies(replies: &[Comment], policy: CountPolicy) -> usize {
    let mut total = 0usize;
    for reply in replies {
        if policy == CountPolicy::Strict && is_blank(&reply.comment_text) {
            total = total.saturating_add(count_replies(&reply.sub_comments, policy));
            continue;
        }
        total = total
            .saturating_add(reply.sub_comments.len())
            .saturating_add(count_replies(&reply.sub_comments, policy));
    }
    total
}

/// Counts a note list under the given policy.
///
/// Raw counts every note and every comment. Strict first classifies each
/// note (skipped notes contribute nothing), then counts only non-blank
/// top-level comments and the replies below them per [`count_replies`].
/// The keyword gates note inclusion in strict mode only.
#[must_use]
pub fn count_notes(notes: &[Note], policy: CountPolicy, keyword: Option<&str>) -> CountReport {
    let mut report = CountReport::new();

    for note in notes {
        match policy {
            CountPolicy::Raw => {
                report.notes = report.notes.saturating_add(1);
                let comments = note.top_comments();
                report.first_level = report.first_level.saturating_add(comments.len());
                report.replies = report
                    .replies
                    .saturating_add(count_replies(comments, policy));
            }
            CountPolicy::Strict => {
                if classify_note(note, keyword).skip {
                    continue;
                }
                report.notes = report.notes.saturating_add(1);

                let valid_top: Vec<&Comment> = note
                    .top_comments()
                    .iter()
                    .filter(|comment| !is_blank(&comment.comment_text))
                    .collect();
                report.first_level = report.first_level.saturating_add(valid_top.len());
                for comment in valid_top {
                    report.replies = report
                        .replies
                        .saturating_add(comment.sub_comments.len())
                        .saturating_add(count_replies(&comment.sub_comments, policy));
                }
            }
        }
    }

    report
}
