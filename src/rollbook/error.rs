use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollbookError {
    #[error("Student not found: roll {0}")]
    StudentNotFound(i32),

    #[error("Roll {roll} already exists in class {class_name}")]
    DuplicateStudent { roll: i32, class_name: String },

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RollbookError>;
