// src/models/classification.rs

/// Outcome of the skip rules for a single note.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    pub skip: bool,
    pub placeholder: bool,
}

impl Classification {
    /// The note survives.
    pub const KEEP: Self = Self {
        skip: false,
        placeholder: false,
    };

    /// The note is dropped.
    pub const SKIP: Self = Self {
        skip: true,
        placeholder: false,
    };

    /// The note is dropped as a metadata-only placeholder.
    pub const PLACEHOLDER: Self = Self {
        skip: true,
        placeholder: true,
    };
}
