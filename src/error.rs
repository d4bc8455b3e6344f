use crate::models::VerseReference;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerseError {
    #[error("quality must be between 0 and 5, got {0}")]
    InvalidQuality(i64),

    #[error("invalid grade '{0}' (expected hard, good, easy or 0-5)")]
    InvalidGrade(String),

    #[error("invalid verse reference '{0}' (expected e.g. 'John 3:16')")]
    InvalidReference(String),

    #[error("unknown book '{0}'")]
    UnknownBook(String),

    #[error("{book} has {max} chapters, got chapter {chapter}")]
    ChapterOutOfRange { book: String, chapter: u32, max: u32 },

    #[error("{0} is already in the memory collection")]
    DuplicateVerse(VerseReference),

    #[error("no memory verse with id '{0}'")]
    ItemNotFound(String),

    #[error("memory verse '{id}' was reviewed elsewhere (expected review count {expected})")]
    StaleItem { id: String, expected: u32 },

    #[error("corrupt app state: {0}")]
    CorruptState(String),

    #[error("no text available for {0}")]
    TextUnavailable(VerseReference),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, VerseError>;
