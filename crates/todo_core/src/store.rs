//! Item store: the owned handle screen controllers talk to.
//!
//! # Responsibility
//! - Own exactly one SQLite connection from open until close.
//! - Expose create/get/list/update/delete over the item repository.
//! - Log every storage failure before handing it back to the caller.
//!
//! # Invariants
//! - Closing consumes the store; no operation can run after close.
//! - Failures are never retried.
//! - Log events carry ids and counts only, never titles or bodies.

use crate::config::StoreConfig;
use crate::db::{open_db, open_db_in_memory};
use crate::model::item::{Item, ItemFields, ItemId};
use crate::repo::item_repo::{ItemRepository, RepoError, RepoResult, SqliteItemRepository};
use log::{debug, error, info};
use rusqlite::Connection;
use std::path::Path;

/// Exclusive handle to the todo collection.
pub struct TodoStore {
    conn: Connection,
}

impl TodoStore {
    /// Opens (creating if needed) the store at `path`.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        Self::from_connection(open_db(path)?)
    }

    /// Opens the store described by `config`.
    pub fn open_with(config: &StoreConfig) -> RepoResult<Self> {
        Self::open(&config.db_path)
    }

    /// Opens a private in-memory store.
    pub fn open_in_memory() -> RepoResult<Self> {
        Self::from_connection(open_db_in_memory()?)
    }

    fn from_connection(conn: Connection) -> RepoResult<Self> {
        SqliteItemRepository::try_new(&conn)?;
        Ok(Self { conn })
    }

    /// Releases the connection.
    pub fn close(self) -> RepoResult<()> {
        match self.conn.close() {
            Ok(()) => {
                info!("event=db_close module=store status=ok");
                Ok(())
            }
            Err((_conn, err)) => {
                error!("event=db_close module=store status=error error={}", err);
                Err(err.into())
            }
        }
    }

    /// Inserts a new item and returns its assigned id.
    pub fn create(&self, fields: &ItemFields) -> RepoResult<ItemId> {
        let id = logged("item_create", self.repo().create_item(fields))?;
        debug!("event=item_create module=store status=ok item_id={id}");
        Ok(id)
    }

    /// Gets one item, `None` when `id` is unknown.
    pub fn get(&self, id: ItemId) -> RepoResult<Option<Item>> {
        logged("item_get", self.repo().get_item(id))
    }

    /// Lists all items ordered by title.
    pub fn list(&self) -> RepoResult<Vec<Item>> {
        let items = logged("item_list", self.repo().list_items())?;
        debug!(
            "event=item_list module=store status=ok count={}",
            items.len()
        );
        Ok(items)
    }

    /// Overwrites item `id`; `false` when no such item exists.
    pub fn update(&self, id: ItemId, fields: &ItemFields) -> RepoResult<bool> {
        let changed = logged("item_update", self.repo().update_item(id, fields))?;
        debug!("event=item_update module=store status=ok item_id={id} changed={changed}");
        Ok(changed)
    }

    /// Removes item `id`; `false` when no such item exists.
    pub fn delete(&self, id: ItemId) -> RepoResult<bool> {
        let deleted = logged("item_delete", self.repo().delete_item(id))?;
        debug!("event=item_delete module=store status=ok item_id={id} deleted={deleted}");
        Ok(deleted)
    }

    // Schema was verified in `from_connection`.
    fn repo(&self) -> SqliteItemRepository<'_> {
        SqliteItemRepository::unchecked(&self.conn)
    }
}

fn logged<T>(event: &str, result: Result<T, RepoError>) -> RepoResult<T> {
    result.inspect_err(|err| {
        error!("event={event} module=store status=error error={err}");
    })
}
