// tests/integration_tests/counting_test.rs
use super::common::write_export;
use anyhow::Result;
use notesift::{CountPolicy, count_notes, load_notes};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_video_only_export_counts_to_zero() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_export(dir.path(), "export.json", &json!([{"type": "video"}]))?;

    let notes = load_notes(&path)?;
    let report = count_notes(&notes, CountPolicy::Strict, None);
    assert_eq!(
        serde_json::to_value(report)?,
        json!({
            "Notes": 0,
            "First-level comments": 0,
            "Replies (≥2nd level)": 0,
            "All comments": 0,
            "Notes + All comments": 0,
        })
    );
    Ok(())
}

#[test]
fn test_blank_top_level_comment_counts_nothing() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_export(
        dir.path(),
        "export.json",
        &json!([{
            "title": "A",
            "body": "hello world",
            "comments": [
                {"comment_text": "  ", "sub_comments": [
                    {"comment_text": "nice", "sub_comments": []}
                ]}
            ]
        }]),
    )?;

    let notes = load_notes(&path)?;
    let report = count_notes(&notes, CountPolicy::Strict, None);
    assert_eq!(report.notes, 1);
    assert_eq!(
        report.first_level, 0,
        "the only top-level comment is blank"
    );
    assert_eq!(
        report.replies, 0,
        "a blank top-level comment's children are not counted"
    );
    assert_eq!(report.total_nodes(), 1);
    Ok(())
}

#[test]
fn test_strict_counts_full_export() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_export(
        dir.path(),
        "export.json",
        &json!([
            {"type": "video"},
            {"list_view_content_desc": "placeholder", "scraped_at": "2024-05-15"},
            {
                "title": "stay report",
                "body": "long weekend",
                "comments": [
                    {"comment_text": "loved it", "sub_comments": [
                        {"comment_text": "same", "sub_comments": []},
                        {"comment_text": " ", "sub_comments": []}
                    ]},
                    {"comment_text": "", "sub_comments": [
                        {"comment_text": "orphaned", "sub_comments": []}
                    ]}
                ]
            }
        ]),
    )?;

    let notes = load_notes(&path)?;
    let report = count_notes(&notes, CountPolicy::Strict, None);
    // One surviving note; "loved it" at the first level; its two children
    // counted (blank one included) because the parent has text; "orphaned"
    // not counted because its parent is blank.
    assert_eq!(report.notes, 1);
    assert_eq!(report.first_level, 1);
    assert_eq!(report.replies, 2);
    assert_eq!(report.all_comments(), 3);
    assert_eq!(report.total_nodes(), 4);
    Ok(())
}

#[test]
fn test_raw_counts_dominate_strict_counts() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_export(
        dir.path(),
        "export.json",
        &json!([
            {"type": "skipped_timestamp"},
            {"scraped_at": "2024-05-15"},
            {
                "title": "mixed",
                "comments": [
                    {"comment_text": "a", "sub_comments": [
                        {"comment_text": "", "sub_comments": []}
                    ]},
                    {"comment_text": "  ", "sub_comments": [
                        {"comment_text": "b", "sub_comments": []}
                    ]}
                ]
            }
        ]),
    )?;

    let notes = load_notes(&path)?;
    let raw = count_notes(&notes, CountPolicy::Raw, None);
    let strict = count_notes(&notes, CountPolicy::Strict, None);

    assert_eq!(raw.notes, 3);
    assert_eq!(raw.first_level, 2);
    assert_eq!(raw.replies, 2);
    assert_eq!(strict.notes, 1);
    assert_eq!(strict.first_level, 1);
    assert_eq!(strict.replies, 1);

    assert!(raw.notes >= strict.notes);
    assert!(raw.first_level >= strict.first_level);
    assert!(raw.replies >= strict.replies);
    assert!(raw.total_nodes() >= strict.total_nodes());
    Ok(())
}
