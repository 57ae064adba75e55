//! Key-value state store contract with SQLite and in-memory backends.
//!
//! # Responsibility
//! - Map the `user`, `subjects` and `theme` keys to typed records.
//! - Provide a durable SQLite backend and an ephemeral in-memory backend.
//!
//! # Invariants
//! - Saves replace the full value for a key; there are no partial updates.
//! - Saves do not validate; callers hand over already-valid snapshots.
//! - Loaded collections pass `Collection::validate()`.

use crate::db::DbError;
use crate::model::study::Collection;
use crate::model::user::{Theme, User};
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const USER_KEY: &str = "user";
pub const SUBJECTS_KEY: &str = "subjects";
pub const THEME_KEY: &str = "theme";

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage error for planner state reads and writes.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A record could not be encoded for storage.
    Serialization(serde_json::Error),
    /// A stored payload is malformed or violates model invariants.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "failed to encode state: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted state: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Durable key-value store holding the planner's state.
///
/// Backends implement the three raw operations; typed accessors are shared.
pub trait StateStore {
    fn read_value(&self, key: &str) -> RepoResult<Option<String>>;
    fn write_value(&self, key: &str, value: &str) -> RepoResult<()>;
    /// Removes every key.
    fn clear(&self) -> RepoResult<()>;

    /// Loads the collection, or an empty one when nothing has been saved.
    fn load_subjects(&self) -> RepoResult<Collection> {
        let Some(text) = self.read_value(SUBJECTS_KEY)? else {
            return Ok(Collection::new());
        };
        let collection: Collection = serde_json::from_str(&text).map_err(|err| {
            RepoError::InvalidData(format!("`{SUBJECTS_KEY}` is not a subject list: {err}"))
        })?;
        collection
            .validate()
            .map_err(|err| RepoError::InvalidData(format!("`{SUBJECTS_KEY}`: {err}")))?;
        Ok(collection)
    }

    fn save_subjects(&self, collection: &Collection) -> RepoResult<()> {
        let text = serde_json::to_string(collection)?;
        self.write_value(SUBJECTS_KEY, &text)
    }

    fn has_subjects(&self) -> RepoResult<bool> {
        Ok(self.read_value(SUBJECTS_KEY)?.is_some())
    }

    fn load_user(&self) -> RepoResult<Option<User>> {
        let Some(text) = self.read_value(USER_KEY)? else {
            return Ok(None);
        };
        let user: User = serde_json::from_str(&text).map_err(|err| {
            RepoError::InvalidData(format!("`{USER_KEY}` is not a user record: {err}"))
        })?;
        User::new(&user.name, user.daily_hours)
            .map(Some)
            .map_err(|err| RepoError::InvalidData(format!("`{USER_KEY}`: {err}")))
    }

    fn save_user(&self, user: &User) -> RepoResult<()> {
        let text = serde_json::to_string(user)?;
        self.write_value(USER_KEY, &text)
    }

    /// Loads the theme preference. Unknown values read as unset.
    fn load_theme(&self) -> RepoResult<Option<Theme>> {
        Ok(self
            .read_value(THEME_KEY)?
            .and_then(|value| Theme::parse(value.as_str())))
    }

    fn save_theme(&self, theme: Theme) -> RepoResult<()> {
        self.write_value(THEME_KEY, theme.as_str())
    }
}

impl<S: StateStore + ?Sized> StateStore for &S {
    fn read_value(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).read_value(key)
    }

    fn write_value(&self, key: &str, value: &str) -> RepoResult<()> {
        (**self).write_value(key, value)
    }

    fn clear(&self) -> RepoResult<()> {
        (**self).clear()
    }
}

/// SQLite-backed state store over the `app_state` table.
pub struct SqliteStateStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateStore<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StateStore for SqliteStateStore<'_> {
    fn read_value(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_value(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO app_state (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn clear(&self) -> RepoResult<()> {
        self.conn.execute("DELETE FROM app_state;", [])?;
        Ok(())
    }
}

/// Process-local state store. Not shareable across threads.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn read_value(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write_value(&self, key: &str, value: &str) -> RepoResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> RepoResult<()> {
        self.values.borrow_mut().clear();
        Ok(())
    }
}
