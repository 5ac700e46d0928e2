use std::collections::HashMap;

use crate::entity::Note;
use crate::error::{Result, TaskmgrError};

/// Notes grouped by the task id they were attached to.
///
/// Entries are created on first use and are never dropped, not even when the
/// task itself is deleted or the last note is removed.
#[derive(Debug, Default)]
pub struct NoteIndex {
    by_task: HashMap<u32, Vec<Note>>,
}

impl NoteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a note under `task_id`. The task is not required to exist.
    pub fn add_note(&mut self, task_id: u32, note: Note) {
        self.by_task.entry(task_id).or_default().push(note);
    }

    /// Notes for `task_id`, or `None` if nothing was ever attached to it.
    pub fn notes_for(&self, task_id: u32) -> Option<&[Note]> {
        self.by_task.get(&task_id).map(Vec::as_slice)
    }

    /// Remove note `note_id` from the notes of `task_id`.
    ///
    /// A note stored under a different task does not match.
    pub fn remove_note(&mut self, task_id: u32, note_id: u32) -> Result<Note> {
        let notes = self
            .by_task
            .get_mut(&task_id)
            .ok_or(TaskmgrError::NoteNotFound(note_id))?;
        let pos = notes
            .iter()
            .position(|n| n.note_id == note_id)
            .ok_or(TaskmgrError::NoteNotFound(note_id))?;
        Ok(notes.remove(pos))
    }

    /// Total notes across all entries.
    pub fn len(&self) -> usize {
        self.by_task.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
