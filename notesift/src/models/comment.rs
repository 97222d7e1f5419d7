// src/models/comment.rs
use serde::{Deserialize, Serialize};

/// One node in a note's nested reply tree.
///
/// Every field may be missing in the scraped data; all default to empty.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Comment {
    #[serde(default)]
    pub comment_text: String,
    #[serde(default)]
    pub unique_id: String,
    #[serde(default)]
    pub date_location: String,
    #[serde(default)]
    pub sub_comments: Vec<Comment>,
}
