use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchetypeError {
    #[error("Invalid archetype code: {0}")]
    InvalidArchetype(String),

    #[error("Invalid family code: {0}")]
    InvalidFamily(String),

    #[error("Invalid question id: {0}")]
    InvalidQuestion(String),

    #[error("Unknown option '{value}' for question '{question}'")]
    UnknownOption { question: String, value: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArchetypeError>;
