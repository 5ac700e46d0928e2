// src/entity/note.rs
use serde::{Deserialize, Serialize};

/// Free-text annotation attached to a task. Ids come from one global
/// sequence, not a per-task one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub note_id: u32,
    pub note_body: String,
}

impl Note {
    pub fn new(note_id: u32, note_body: impl Into<String>) -> Self {
        Self {
            note_id,
            note_body: note_body.into(),
        }
    }
}
