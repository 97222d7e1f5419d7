// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Cli, Command, run};
pub use crate::core::classify::classify_note;
pub use crate::core::count::{CountPolicy, count_notes, count_replies};
pub use crate::core::filter::filter_notes;
pub use crate::core::flatten::flatten_comments;
pub use crate::core::loader::{collect_json_files, load_notes, write_notes};
pub use models::{Classification, Comment, CountReport, FilteredNote, FlatComment, Note};
