// src/models/note.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::Comment;

/// Top-level scraped record (a post) with an optional nested reply tree.
///
/// Scrapers emit sparse records: every recognized field may be missing.
/// Fields we do not recognize are kept in `extra` so a filtered copy can
/// round-trip them unchanged.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Note {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Note {
    /// The `type` field, with a missing field read as empty.
    #[inline]
    #[must_use]
    pub fn kind_text(&self) -> &str {
        self.kind.as_deref().unwrap_or("")
    }

    /// The title, with a missing field read as empty.
    #[inline]
    #[must_use]
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// The body, with a missing field read as empty.
    #[inline]
    #[must_use]
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    /// The top-level comments, with a missing field read as empty.
    #[inline]
    #[must_use]
    pub fn top_comments(&self) -> &[Comment] {
        self.comments.as_deref().unwrap_or(&[])
    }
}
