//! JSON import/export for the memory verse collection.
//! The file is a JSON array of flat verse objects, the same layout the
//! browser client kept in local storage.

use crate::error::Result;
use crate::models::{MemorizedItem, MemoryCollection};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Exports the collection to a pretty-printed JSON file at `path`.
pub fn export_json_to_path(collection: &MemoryCollection, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json_string = serde_json::to_string_pretty(collection)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;

    tracing::info!(
        "Exported {} memory verses to '{}'",
        collection.len(),
        path.display()
    );
    Ok(())
}

/// Imports a collection from a JSON file.
/// Scheduling fields are repaired to the ease and interval floors; duplicate
/// passages after the first are dropped.
pub fn import_json(path: impl AsRef<Path>) -> Result<MemoryCollection> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let items: Vec<MemorizedItem> = serde_json::from_str(&contents)?;
    let read = items.len();

    let mut collection = MemoryCollection::new();
    collection.merge(MemoryCollection::from_items(
        items.into_iter().map(MemorizedItem::normalized).collect(),
    ));

    tracing::info!(
        "Imported {} of {} memory verses from '{}'",
        collection.len(),
        read,
        path.display()
    );
    Ok(collection)
}
