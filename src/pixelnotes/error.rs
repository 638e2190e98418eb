use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Cannot save an empty note")]
    EmptyNote,

    #[error("No note selected")]
    NoSelection,

    #[error("Note not found: {0}")]
    NoteNotFound(Uuid),

    #[error("Stored notes are corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, NotesError>;
