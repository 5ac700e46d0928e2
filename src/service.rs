//! Task and note operations over the in-memory stores.

use tracing::debug;

use crate::entity::{Note, Task};
use crate::error::{Result, TaskmgrError};
use crate::storage::{IdSequence, NoteIndex, TaskStore};

const SAMPLE_DUE_DATE: &str = "2021-01-01";
const SAMPLE_TASK_COUNT: u32 = 3;
const SAMPLE_NOTES_PER_TASK: u32 = 3;

/// Update payload for a task. `None` leaves the field unchanged.
#[derive(Debug, Default, Clone)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.due_date.is_none()
    }
}

#[derive(Debug, Default)]
pub struct TaskService {
    task_ids: IdSequence,
    note_ids: IdSequence,
    tasks: TaskStore,
    notes: NoteIndex,
}

impl TaskService {
    /// Create a service with no tasks and no notes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service holding three sample tasks, with three notes on each
    /// of the first two.
    pub fn with_sample_data() -> Result<Self> {
        let mut service = Self::new();
        for n in 1..=SAMPLE_TASK_COUNT {
            service.create_task(
                format!("Task {}", n),
                format!("Description {}", n),
                SAMPLE_DUE_DATE.to_string(),
            )?;
        }
        for task_id in [1, 2] {
            for i in 0..SAMPLE_NOTES_PER_TASK {
                service.add_note(task_id, format!("Note - {}", i))?;
            }
        }
        Ok(service)
    }

    pub fn list_tasks(&self) -> &[Task] {
        self.tasks.list()
    }

    pub fn create_task(
        &mut self,
        title: String,
        description: String,
        due_date: String,
    ) -> Result<Task> {
        let task = Task::new(self.task_ids.next()?, title, description, due_date);
        self.tasks.append(task.clone());
        debug!(task_id = task.id, "created task");
        Ok(task)
    }

    pub fn get_task(&self, id: u32) -> Result<&Task> {
        self.tasks
            .find_by_id(id)
            .ok_or(TaskmgrError::TaskNotFound(id))
    }

    /// Overwrite only the fields present in `update`.
    pub fn update_task(&mut self, id: u32, update: TaskUpdate) -> Result<&Task> {
        let task = self
            .tasks
            .find_by_id_mut(id)
            .ok_or(TaskmgrError::TaskNotFound(id))?;

        if let Some(title) = update.title {
            task.title = title;
        }
        if let Some(description) = update.description {
            task.description = description;
        }
        if let Some(due_date) = update.due_date {
            task.due_date = due_date;
        }

        debug!(task_id = id, "updated task");
        Ok(&*task)
    }

    /// Remove a task. Notes attached to it stay reachable by task id.
    pub fn delete_task(&mut self, id: u32) -> Result<Task> {
        let task = self.tasks.remove(id).ok_or(TaskmgrError::TaskNotFound(id))?;
        debug!(task_id = id, "deleted task");
        Ok(task)
    }

    /// Notes attached to `task_id`; empty when none were ever attached.
    pub fn list_notes(&self, task_id: u32) -> Vec<Note> {
        self.notes
            .notes_for(task_id)
            .map(<[Note]>::to_vec)
            .unwrap_or_default()
    }

    /// Attach a note to `task_id` whether or not that task exists.
    pub fn add_note(&mut self, task_id: u32, body: String) -> Result<Note> {
        let note = Note::new(self.note_ids.next()?, body);
        self.notes.add_note(task_id, note.clone());
        debug!(task_id, note_id = note.note_id, "added note");
        Ok(note)
    }

    pub fn delete_note(&mut self, task_id: u32, note_id: u32) -> Result<Note> {
        let note = self.notes.remove_note(task_id, note_id)?;
        debug!(task_id, note_id, "deleted note");
        Ok(note)
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    /// Last task id issued, 0 if none.
    pub fn last_task_id(&self) -> u32 {
        self.task_ids.current()
    }

    /// Last note id issued, 0 if none.
    pub fn last_note_id(&self) -> u32 {
        self.note_ids.current()
    }
}
