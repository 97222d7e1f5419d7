// tests/integration_tests/divergence_test.rs
use super::common::write_export;
use anyhow::Result;
use notesift::{CountPolicy, count_notes, filter_notes, load_notes};
use serde_json::json;
use tempfile::TempDir;

/// The counter and the flattener treat blank nodes differently, and both
/// behaviors are pinned here on the same input: below a non-blank parent, a
/// blank node still lets counting continue into its subtree, while
/// flattening drops the subtree outright.
#[test]
fn test_counter_and_flattener_disagree_below_blank_nodes() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_export(
        dir.path(),
        "export.json",
        &json!([{
            "title": "divergent",
            "comments": [
                {"comment_text": "top", "unique_id": "c1", "date_location": "05-15", "sub_comments": [
                    {"comment_text": "", "unique_id": "c2", "date_location": "05-15", "sub_comments": [
                        {"comment_text": "deep", "unique_id": "c3", "date_location": "05-16", "sub_comments": []}
                    ]}
                ]}
            ]
        }]),
    )?;
    let notes = load_notes(&path)?;

    // Counting: the blank node is counted as top's child; its own child
    // "deep" is not counted because its parent is blank.
    let report = count_notes(&notes, CountPolicy::Strict, None);
    assert_eq!(report.notes, 1);
    assert_eq!(report.first_level, 1);
    assert_eq!(report.replies, 1);
    assert_eq!(report.all_comments(), 2);

    // Flattening: the blank node takes its whole subtree with it, so only
    // "top" survives even though the count saw two comments.
    let filtered = filter_notes(&notes, None);
    let flat = filtered[0].comments.as_deref().unwrap();
    let ids: Vec<_> = flat.iter().map(|c| c.unique_id.as_str()).collect();
    assert_eq!(ids, ["c1"]);
    Ok(())
}

/// One level deeper: with a non-blank node under the blank one, counting
/// resumes for that node's children while flattening still drops
/// everything below the blank node.
#[test]
fn test_counting_resumes_below_blank_nodes() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_export(
        dir.path(),
        "export.json",
        &json!([{
            "title": "resume",
            "comments": [
                {"comment_text": "top", "unique_id": "c1", "sub_comments": [
                    {"comment_text": "", "unique_id": "c2", "sub_comments": [
                        {"comment_text": "found", "unique_id": "c3", "sub_comments": [
                            {"comment_text": "reply", "unique_id": "c4", "sub_comments": []}
                        ]}
                    ]}
                ]}
            ]
        }]),
    )?;
    let notes = load_notes(&path)?;

    // The blank node is counted as top's child. "found" is not counted
    // (blank parent) but, being non-blank itself, contributes "reply".
    let report = count_notes(&notes, CountPolicy::Strict, None);
    assert_eq!(report.first_level, 1);
    assert_eq!(report.replies, 2);

    let filtered = filter_notes(&notes, None);
    let flat = filtered[0].comments.as_deref().unwrap();
    let ids: Vec<_> = flat.iter().map(|c| c.unique_id.as_str()).collect();
    assert_eq!(ids, ["c1"], "flattening never reaches c3 or c4");
    Ok(())
}
