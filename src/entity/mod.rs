mod note;
mod task;

pub use note::Note;
pub use task::Task;
