//! Application configuration.
//!
//! Values are resolved with priority: config.toml > environment (.env) > default.

use crate::error::Result;
use serde::Deserialize;
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_DATABASE_PATH: &str = "verses.sqlite3";
pub const DATABASE_ENV: &str = "VERSES_DB";
pub const BIBLE_ENV: &str = "VERSES_BIBLE";

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "verse_memory=info,verses=info";

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    database: Option<DatabaseSection>,
    scripture: Option<ScriptureSection>,
}

#[derive(Debug, Default, Deserialize)]
struct DatabaseSection {
    path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ScriptureSection {
    bible_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_path: PathBuf,
    /// Bundled translation used to fill in verse text
    pub bible_path: Option<PathBuf>,
}

impl Config {
    /// Loads `.env`, then `config.toml` from the working directory if present.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let file = match std::fs::read_to_string(CONFIG_FILE) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        Self::resolve(
            file.as_deref(),
            std::env::var(DATABASE_ENV).ok(),
            std::env::var(BIBLE_ENV).ok(),
        )
    }

    pub fn resolve(
        file_contents: Option<&str>,
        env_database: Option<String>,
        env_bible: Option<String>,
    ) -> Result<Self> {
        let file: FileConfig = match file_contents {
            Some(contents) => toml::from_str(contents)?,
            None => FileConfig::default(),
        };

        let database_path = match (file.database.and_then(|d| d.path), env_database) {
            (Some(path), _) => {
                tracing::info!("Using database from {}: {}", CONFIG_FILE, path);
                PathBuf::from(path)
            }
            (None, Some(path)) => {
                tracing::info!("Using database from {} env: {}", DATABASE_ENV, path);
                PathBuf::from(path)
            }
            (None, None) => PathBuf::from(DEFAULT_DATABASE_PATH),
        };

        let bible_path = file
            .scripture
            .and_then(|s| s.bible_path)
            .or(env_bible)
            .map(PathBuf::from);

        Ok(Self {
            database_path,
            bible_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VerseError;

    #[test]
    fn test_defaults() {
        let config = Config::resolve(None, None, None).unwrap();
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DATABASE_PATH));
        assert!(config.bible_path.is_none());
    }

    #[test]
    fn test_file_beats_env() {
        let toml = r#"
            [database]
            path = "data/memory.db"

            [scripture]
            bible_path = "data/asv.json"
        "#;
        let config = Config::resolve(
            Some(toml),
            Some("env.db".to_string()),
            Some("env.json".to_string()),
        )
        .unwrap();
        assert_eq!(config.database_path, PathBuf::from("data/memory.db"));
        assert_eq!(config.bible_path, Some(PathBuf::from("data/asv.json")));
    }

    #[test]
    fn test_env_fills_gaps() {
        let config = Config::resolve(
            Some("[database]\n"),
            Some("env.db".to_string()),
            Some("env.json".to_string()),
        )
        .unwrap();
        assert_eq!(config.database_path, PathBuf::from("env.db"));
        assert_eq!(config.bible_path, Some(PathBuf::from("env.json")));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let result = Config::resolve(Some("[database\npath = 3"), None, None);
        assert!(matches!(result, Err(VerseError::Config(_))));
    }
}
