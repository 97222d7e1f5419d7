// src/models/filtered_note.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::FlatComment;

/// A kept note with its reply tree replaced by the flattened comment list.
///
/// `comments` is `None` when every comment was filtered away; the field is
/// then omitted from the output entirely. Unrecognized input fields ride
/// along in `extra`, unchanged.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FilteredNote {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<FlatComment>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
