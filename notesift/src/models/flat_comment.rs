// src/models/flat_comment.rs
use serde::{Deserialize, Serialize};

/// A comment lifted out of the reply tree, keeping only the canonical
/// fields. Serialization order matches the export format: `unique_id`,
/// `comment_text`, `date_location`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlatComment {
    pub unique_id: String,
    pub comment_text: String,
    pub date_location: String,
}
