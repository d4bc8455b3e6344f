//! Book/chapter/verse reference identifying a memorized passage.
use super::books::find_book;
use crate::error::{Result, VerseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawReference")]
pub struct VerseReference {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseReference {
    /// Builds a reference against the book catalog, storing the canonical
    /// book name.
    pub fn new(book: &str, chapter: u32, verse: u32) -> Result<Self> {
        let entry = find_book(book).ok_or_else(|| VerseError::UnknownBook(book.to_string()))?;

        if chapter == 0 || verse == 0 {
            return Err(VerseError::InvalidReference(format!(
                "{} {}:{}",
                entry.name, chapter, verse
            )));
        }
        if chapter > entry.chapters {
            return Err(VerseError::ChapterOutOfRange {
                book: entry.name.to_string(),
                chapter,
                max: entry.chapters,
            });
        }

        Ok(Self {
            book: entry.name.to_string(),
            chapter,
            verse,
        })
    }
}

/// Unvalidated wire form; deserialized references go through
/// [`VerseReference::new`].
#[derive(Deserialize)]
struct RawReference {
    book: String,
    chapter: u32,
    verse: u32,
}

impl TryFrom<RawReference> for VerseReference {
    type Error = VerseError;

    fn try_from(raw: RawReference) -> Result<Self> {
        Self::new(&raw.book, raw.chapter, raw.verse)
    }
}

impl fmt::Display for VerseReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

impl FromStr for VerseReference {
    type Err = VerseError;

    /// Parses `"<book> <chapter>:<verse>"`, e.g. `"1 Cor 13:4"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || VerseError::InvalidReference(s.to_string());

        let s = s.trim();
        let (book, location) = s.rsplit_once(char::is_whitespace).ok_or_else(invalid)?;
        let (chapter, verse) = location.split_once(':').ok_or_else(invalid)?;
        let chapter = chapter.parse::<u32>().map_err(|_| invalid())?;
        let verse = verse.parse::<u32>().map_err(|_| invalid())?;

        Self::new(book.trim(), chapter, verse)
    }
}
