//! Database operations for the memory verse collection
//!
//! Handles SQLite initialization, CRUD for memorized items, optimistic
//! review writes and the simulated day offset used to fast-forward schedules.

use crate::error::{Result, VerseError};
use crate::models::{MemorizedItem, MemoryCollection, VerseReference, select_due};
use chrono::{DateTime, Duration, Utc};
use rusqlite::{Connection, OptionalExtension, Row, ffi, params};
use std::path::Path;

const ITEM_COLUMNS: &str = "id, book, chapter, verse, text, ease_factor, interval_days, \
     next_review, review_count, date_added";

/// Opens (or creates) the database at `path` and ensures the schema exists.
pub fn init_database(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(path)?;
    create_schema(&conn)?;
    tracing::info!("Opened memory verse database at {}", path.display());
    Ok(conn)
}

/// Creates tables for memorized items and app state.
pub fn create_schema(conn: &Connection) -> Result<()> {
    // seq keeps insertion order stable across reloads
    conn.execute(
        "CREATE TABLE IF NOT EXISTS memory_verses (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            book TEXT NOT NULL,
            chapter INTEGER NOT NULL CHECK (chapter >= 1),
            verse INTEGER NOT NULL CHECK (verse >= 1),
            text TEXT NOT NULL,
            ease_factor REAL NOT NULL DEFAULT 2.5,
            interval_days INTEGER NOT NULL DEFAULT 1,
            next_review TEXT NOT NULL,
            review_count INTEGER NOT NULL DEFAULT 0,
            date_added TEXT NOT NULL,
            UNIQUE(book, chapter, verse)
        )",
        (),
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS app_state (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO app_state (key, value) VALUES ('day_offset', '0')",
        (),
    )?;

    Ok(())
}

fn row_to_item(row: &Row<'_>) -> rusqlite::Result<MemorizedItem> {
    Ok(MemorizedItem {
        id: row.get(0)?,
        reference: VerseReference {
            book: row.get(1)?,
            chapter: row.get(2)?,
            verse: row.get(3)?,
        },
        text: row.get(4)?,
        ease_factor: row.get(5)?,
        interval: row.get(6)?,
        next_review: row.get(7)?,
        review_count: row.get(8)?,
        date_added: row.get(9)?,
    })
}

/// True only for the `UNIQUE(book, chapter, verse)` index; id collisions
/// and CHECK failures stay database errors.
fn is_duplicate_passage(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, Some(msg))
            if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
                && msg.contains("memory_verses.book")
    )
}

/// Number of simulated days added to the wall clock
pub fn day_offset(conn: &Connection) -> Result<i64> {
    let value: String = conn.query_row(
        "SELECT value FROM app_state WHERE key = 'day_offset'",
        [],
        |row| row.get(0),
    )?;
    value
        .parse::<i64>()
        .map_err(|_| VerseError::CorruptState(format!("day_offset = '{value}'")))
}

/// Wall-clock time shifted by the stored day offset
pub fn current_time(conn: &Connection) -> Result<DateTime<Utc>> {
    current_time_at(conn, Utc::now())
}

pub fn current_time_at(conn: &Connection, wall_clock: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let offset = day_offset(conn)?;
    Duration::try_days(offset)
        .and_then(|shift| wall_clock.checked_add_signed(shift))
        .ok_or_else(|| VerseError::CorruptState(format!("day_offset {offset} is out of range")))
}

/// Advances the simulated clock by 24 hours and returns the new offset
pub fn advance_day(conn: &Connection) -> Result<i64> {
    let offset = day_offset(conn)? + 1;
    set_day_offset(conn, offset)?;
    tracing::info!("Clock advanced to +{} days", offset);
    Ok(offset)
}

pub fn reset_clock(conn: &Connection) -> Result<()> {
    set_day_offset(conn, 0)
}

fn set_day_offset(conn: &Connection, offset: i64) -> Result<()> {
    conn.execute(
        "UPDATE app_state SET value = ?1 WHERE key = 'day_offset'",
        params![offset.to_string()],
    )?;
    Ok(())
}

/// Stores a new item. A passage already in the table is rejected with
/// `DuplicateVerse`.
pub fn insert_item(item: &MemorizedItem, conn: &Connection) -> Result<()> {
    let result = conn.execute(
        "INSERT INTO memory_verses
            (id, book, chapter, verse, text, ease_factor, interval_days, next_review, review_count, date_added)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            item.id,
            item.reference.book,
            item.reference.chapter,
            item.reference.verse,
            item.text,
            item.ease_factor,
            item.interval,
            item.next_review,
            item.review_count,
            item.date_added
        ],
    );

    match result {
        Ok(_) => {
            tracing::info!("Added {} to memory verses", item.reference);
            Ok(())
        }
        Err(e) if is_duplicate_passage(&e) => {
            Err(VerseError::DuplicateVerse(item.reference.clone()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Loads every item in insertion order
pub fn load_collection(conn: &Connection) -> Result<MemoryCollection> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ITEM_COLUMNS} FROM memory_verses ORDER BY seq ASC"
    ))?;

    let items = stmt
        .query_map([], row_to_item)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    tracing::debug!("Loaded {} memory verses", items.len());
    Ok(MemoryCollection::from_items(items))
}

pub fn get_item(id: &str, conn: &Connection) -> Result<MemorizedItem> {
    conn.query_row(
        &format!("SELECT {ITEM_COLUMNS} FROM memory_verses WHERE id = ?1"),
        params![id],
        row_to_item,
    )
    .optional()?
    .ok_or_else(|| VerseError::ItemNotFound(id.to_string()))
}

pub fn delete_item(id: &str, conn: &Connection) -> Result<()> {
    let deleted = conn.execute("DELETE FROM memory_verses WHERE id = ?1", params![id])?;
    if deleted == 0 {
        return Err(VerseError::ItemNotFound(id.to_string()));
    }
    tracing::info!("Removed memory verse {}", id);
    Ok(())
}

/// Items due at `now`, in collection order
pub fn due_items(now: DateTime<Utc>, conn: &Connection) -> Result<Vec<MemorizedItem>> {
    let collection = load_collection(conn)?;
    Ok(select_due(&collection, now).into_iter().cloned().collect())
}

/// Writes the scheduling fields of a graded item.
///
/// The write only lands if the stored review count still equals
/// `expected_review_count`; otherwise the item was graded elsewhere in the
/// meantime and `StaleItem` is returned with nothing changed.
pub fn save_review(
    item: &MemorizedItem,
    expected_review_count: u32,
    conn: &Connection,
) -> Result<()> {
    let updated = conn.execute(
        "UPDATE memory_verses
         SET ease_factor = ?1, interval_days = ?2, next_review = ?3, review_count = ?4
         WHERE id = ?5 AND review_count = ?6",
        params![
            item.ease_factor,
            item.interval,
            item.next_review,
            item.review_count,
            item.id,
            expected_review_count
        ],
    )?;

    if updated == 0 {
        // Distinguish a missing row from a concurrent review
        get_item(&item.id, conn)?;
        return Err(VerseError::StaleItem {
            id: item.id.clone(),
            expected: expected_review_count,
        });
    }

    tracing::debug!(
        "Saved review of {}: interval {}d, ease {:.2}",
        item.reference,
        item.interval,
        item.ease_factor
    );
    Ok(())
}

/// Inserts every item whose passage is not stored yet, in one transaction.
/// Any failure rolls the whole merge back. Returns how many were added.
pub fn merge_collection(collection: &MemoryCollection, conn: &mut Connection) -> Result<usize> {
    let tx = conn.transaction()?;
    let existing = load_collection(&tx)?;
    let mut added = 0;
    for item in collection {
        if existing.contains_reference(&item.reference) {
            tracing::warn!("Skipping import of {}: already memorizing", item.reference);
            continue;
        }
        insert_item(item, &tx)?;
        added += 1;
    }
    tx.commit()?;

    tracing::info!("Merged {} of {} memory verses", added, collection.len());
    Ok(added)
}

/// Replaces the whole table with `collection` in one transaction
pub fn replace_collection(collection: &MemoryCollection, conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM memory_verses", ())?;
    for item in collection {
        insert_item(item, &tx)?;
    }
    tx.commit()?;

    tracing::info!("Replaced collection with {} memory verses", collection.len());
    Ok(())
}
