pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;
pub mod scripture;

pub use error::{Result, VerseError};
pub use models::{
    MemorizedItem, MemoryCollection, Quality, ReviewOutcome, ReviewSession, VerseReference,
};
