//! In-memory storage for tasks and notes.
//!
//! Nothing here is synchronized except [`IdSequence`]; callers share the
//! stores behind a single lock (see [`crate::http::TaskServer`]).

mod note_index;
mod sequence;
mod task_store;

pub use note_index::NoteIndex;
pub use sequence::IdSequence;
pub use task_store::TaskStore;
