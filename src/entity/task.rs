// src/entity/task.rs
use serde::{Deserialize, Serialize};

/// A unit of work tracked by the service.
///
/// `due_date` is carried as opaque text; nothing parses or validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub due_date: String,
}

impl Task {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            due_date: due_date.into(),
        }
    }
}
