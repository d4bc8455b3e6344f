//! Application state and command handling.
//! Wires configuration, the database and the scripture source together and
//! drives interactive review sessions over any line-based input/output.

use crate::config::Config;
use crate::database::db;
use crate::error::{Result, VerseError};
use crate::export::json::{export_json_to_path, import_json};
use crate::models::{MemorizedItem, MemoryCollection, Quality, ReviewSession, VerseReference, grade};
use crate::scripture::{BundledBible, ScriptureSource};
use chrono::{DateTime, Local, Utc};
use rusqlite::Connection;
use std::io::{BufRead, Write};
use std::path::Path;

/// Result of an interactive review run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewSummary {
    pub reviewed: usize,
    pub remaining: usize,
}

pub struct App {
    conn: Connection,
    scripture: Option<Box<dyn ScriptureSource>>,
}

/// Formats a timestamp as a local YYYY-MM-DD date
pub fn format_date(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

impl App {
    pub fn new(conn: Connection, scripture: Option<Box<dyn ScriptureSource>>) -> Self {
        Self { conn, scripture }
    }

    pub fn open(config: &Config) -> Result<Self> {
        let conn = db::init_database(&config.database_path)?;
        let scripture = match &config.bible_path {
            Some(path) => Some(Box::new(BundledBible::load(path)?) as Box<dyn ScriptureSource>),
            None => None,
        };
        Ok(Self::new(conn, scripture))
    }

    pub fn now(&self) -> Result<DateTime<Utc>> {
        db::current_time(&self.conn)
    }

    pub fn collection(&self) -> Result<MemoryCollection> {
        db::load_collection(&self.conn)
    }

    /// Adds a passage for memorization. Without explicit text the verse is
    /// looked up in the configured scripture source.
    pub fn add_verse(&self, reference: &str, text: Option<String>) -> Result<MemorizedItem> {
        let reference: VerseReference = reference.parse()?;

        if self.collection()?.contains_reference(&reference) {
            return Err(VerseError::DuplicateVerse(reference));
        }

        let text = match text {
            Some(text) => text,
            None => self
                .scripture
                .as_ref()
                .and_then(|source| source.verse_text(&reference))
                .ok_or_else(|| VerseError::TextUnavailable(reference.clone()))?,
        };

        let item = MemorizedItem::new(reference, text, self.now()?);
        db::insert_item(&item, &self.conn)?;
        Ok(item)
    }

    pub fn due(&self) -> Result<Vec<MemorizedItem>> {
        db::due_items(self.now()?, &self.conn)
    }

    /// Grades a single verse by id and persists the new schedule.
    pub fn grade_verse(&self, id: &str, quality: Quality) -> Result<MemorizedItem> {
        let item = db::get_item(id, &self.conn)?;
        let graded = grade(&item, quality, self.now()?);
        db::save_review(&graded, item.review_count, &self.conn)?;
        Ok(graded)
    }

    pub fn remove_verse(&self, id: &str) -> Result<()> {
        db::delete_item(id, &self.conn)
    }

    pub fn export(&self, path: impl AsRef<Path>) -> Result<usize> {
        let collection = self.collection()?;
        export_json_to_path(&collection, path)?;
        Ok(collection.len())
    }

    /// Imports a JSON export. Merging skips passages already present;
    /// replacing discards the current collection first. Either way the
    /// import is all-or-nothing.
    pub fn import(&mut self, path: impl AsRef<Path>, replace: bool) -> Result<usize> {
        let imported = import_json(path)?;

        if replace {
            db::replace_collection(&imported, &mut self.conn)?;
            return Ok(imported.len());
        }

        db::merge_collection(&imported, &mut self.conn)
    }

    pub fn advance_day(&self) -> Result<i64> {
        db::advance_day(&self.conn)
    }

    /// Runs one review pass over the due verses.
    ///
    /// Each verse is shown by reference, revealed on Enter and graded with
    /// hard/good/easy (or 0-5). Every grade is saved before the next verse
    /// is shown. `q` or end of input stops early.
    pub fn run_review<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<ReviewSummary> {
        let mut session = ReviewSession::new_from_due(&self.collection()?, self.now()?);
        let mut reviewed = 0;

        if session.is_completed() {
            writeln!(output, "No verses due for review.")?;
            return Ok(ReviewSummary {
                reviewed,
                remaining: 0,
            });
        }

        'session: while let Some(item) = session.current().cloned() {
            writeln!(output, "[{}] {}", session.progress_message(), item.reference)?;
            write!(output, "Press Enter to reveal (q to quit) ")?;
            output.flush()?;

            match read_trimmed(&mut input)? {
                None => break,
                Some(line) if line.eq_ignore_ascii_case("q") => break,
                Some(_) => {}
            }

            session.reveal();
            writeln!(output, "\"{}\"", item.text)?;

            let quality = loop {
                write!(output, "Grade [h]ard / [g]ood / [e]asy: ")?;
                output.flush()?;
                let Some(line) = read_trimmed(&mut input)? else {
                    break 'session;
                };
                match line.parse::<Quality>() {
                    Ok(quality) => break quality,
                    Err(e) => writeln!(output, "{}", e)?,
                }
            };

            let expected = item.review_count;
            if let Some(graded) = session.grade_current(quality, self.now()?) {
                db::save_review(&graded, expected, &self.conn)?;
                reviewed += 1;
                writeln!(
                    output,
                    "Next review in {} day(s), on {}",
                    graded.interval,
                    format_date(graded.next_review)
                )?;
            }
        }

        let summary = ReviewSummary {
            reviewed,
            remaining: session.remaining(),
        };
        writeln!(
            output,
            "Reviewed {} verse(s), {} left in this session.",
            summary.reviewed, summary.remaining
        )?;
        tracing::info!("Review session finished: {:?}", summary);
        Ok(summary)
    }
}

fn read_trimmed<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
