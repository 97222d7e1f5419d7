// src/core/test_utils.rs
use crate::models::{Comment, Note};

pub fn leaf(text: &str) -> Comment {
    reply(text, Vec::new())
}

pub fn reply(text: &str, sub_comments: Vec<Comment>) -> Comment {
    Comment {
        comment_text: String::from(text),
        unique_id: format!("id-{}", text.trim()),
        date_location: String::from("05-15 Shanghai"),
        sub_comments,
    }
}

pub fn note_with_comments(title: &str, comments: Vec<Comment>) -> Note {
    Note {
        title: Some(String::from(title)),
        body: Some(String::from("body text")),
        comments: Some(comments),
        ..Note::default()
    }
}

pub fn typed_note(kind: &str) -> Note {
    Note {
        kind: Some(String::from(kind)),
        ..Note::default()
    }
}
