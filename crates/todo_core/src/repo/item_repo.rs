//! Item repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `todo` table.
//! - Keep SQL and the 0/1 `state` encoding inside the persistence boundary.
//!
//! # Invariants
//! - Read paths reject invalid persisted state instead of masking it.
//! - Unknown ids are normal outcomes (`None` / `false`), not errors.
//! - `update_item` reports row count, not a content diff.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::item::{Item, ItemFields, ItemId};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use thiserror::Error;

const TODO_TABLE: &str = "todo";
const TODO_COLUMNS: &[&str] = &["id", "title", "body", "state"];

const ITEM_SELECT_SQL: &str = "SELECT
    id,
    title,
    body,
    state
FROM todo";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for item persistence and query operations.
#[derive(Debug, Error)]
pub enum RepoError {
    /// Medium could not be opened, read or written.
    #[error(transparent)]
    Db(#[from] DbError),
    /// Write rejected by a schema constraint.
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("invalid persisted item data: {0}")]
    InvalidData(String),
    #[error("connection schema version {actual_version} does not match expected {expected_version}")]
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    #[error("required table `{0}` is missing")]
    MissingRequiredTable(&'static str),
    #[error("required column `{table}.{column}` is missing")]
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        match value.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => Self::Constraint(value.to_string()),
            _ => Self::Db(DbError::Sqlite(value)),
        }
    }
}

/// Repository interface for item CRUD operations.
pub trait ItemRepository {
    /// Inserts one row and returns its assigned id.
    fn create_item(&self, fields: &ItemFields) -> RepoResult<ItemId>;
    /// Gets one row by id, `None` when absent.
    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>>;
    /// Lists all rows ordered by `title ASC, id ASC`.
    fn list_items(&self) -> RepoResult<Vec<Item>>;
    /// Overwrites one row; `false` when the id is unknown.
    fn update_item(&self, id: ItemId, fields: &ItemFields) -> RepoResult<bool>;
    /// Removes one row; `false` when the id is unknown.
    fn delete_item(&self, id: ItemId) -> RepoResult<bool>;
}

/// SQLite-backed item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `user_version` is not the latest.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   was tampered with or created by something else.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    /// Wraps a connection whose schema the caller already verified.
    pub(crate) fn unchecked(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn create_item(&self, fields: &ItemFields) -> RepoResult<ItemId> {
        self.conn.execute(
            "INSERT INTO todo (title, body, state) VALUES (?1, ?2, ?3);",
            params![
                fields.title.as_str(),
                fields.body.as_str(),
                bool_to_int(fields.done)
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_item_row(row)?)),
            None => Ok(None),
        }
    }

    fn list_items(&self) -> RepoResult<Vec<Item>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} ORDER BY title ASC, id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }

        Ok(items)
    }

    fn update_item(&self, id: ItemId, fields: &ItemFields) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE todo
             SET
                title = ?1,
                body = ?2,
                state = ?3
             WHERE id = ?4;",
            params![
                fields.title.as_str(),
                fields.body.as_str(),
                bool_to_int(fields.done),
                id,
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete_item(&self, id: ItemId) -> RepoResult<bool> {
        let changed = self.conn.execute("DELETE FROM todo WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1;",
            [TODO_TABLE],
            |_| Ok(()),
        )
        .optional()?
        .is_some();
    if !table_exists {
        return Err(RepoError::MissingRequiredTable(TODO_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let present = stmt
        .query_map([TODO_TABLE], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    if let Some(column) = TODO_COLUMNS
        .iter()
        .copied()
        .find(|column| !present.iter().any(|name| name.as_str() == *column))
    {
        return Err(RepoError::MissingRequiredColumn {
            table: TODO_TABLE,
            column,
        });
    }

    Ok(())
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<Item> {
    let id: ItemId = row.get("id")?;
    let done = match row.get::<_, i64>("state")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid state value `{other}` in todo.state for id {id}"
            )));
        }
    };

    Ok(Item {
        id,
        title: row.get("title")?,
        body: row.get("body")?,
        done,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
