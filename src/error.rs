use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskmgrError {
    #[error("Task with id {0} not found")]
    TaskNotFound(u32),

    #[error("Note with id {0} not found")]
    NoteNotFound(u32),

    #[error("Id sequence exhausted")]
    IdsExhausted,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TaskmgrError>;
