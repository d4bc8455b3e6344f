//! Verse text lookup used when a passage is first added for memorization.

use crate::error::Result;
use crate::models::VerseReference;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub trait ScriptureSource {
    fn verse_text(&self, reference: &VerseReference) -> Option<String>;
}

/// Bundled translation laid out as `{ book: { chapter: { verse: text } } }`.
pub struct BundledBible {
    books: HashMap<String, HashMap<String, HashMap<String, String>>>,
}

impl BundledBible {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self {
            books: serde_json::from_str(json)?,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bible = Self::from_json_str(&fs::read_to_string(path)?)?;
        tracing::info!(
            "Loaded bundled text for {} books from '{}'",
            bible.books.len(),
            path.display()
        );
        Ok(bible)
    }
}

impl ScriptureSource for BundledBible {
    fn verse_text(&self, reference: &VerseReference) -> Option<String> {
        self.books
            .get(&reference.book)?
            .get(&reference.chapter.to_string())?
            .get(&reference.verse.to_string())
            .map(|text| text.trim().to_string())
    }
}
