//! List screen controller.

use super::DetailLaunch;
use crate::model::item::{done_label, Item, ItemId};
use crate::repo::item_repo::RepoResult;
use crate::store::TodoStore;

/// One rendered list row: the item plus its done suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub item: Item,
    pub status_label: &'static str,
}

impl From<Item> for ListRow {
    fn from(item: Item) -> Self {
        let status_label = done_label(item.done);
        Self { item, status_label }
    }
}

/// Controller for the title-ordered item list.
pub struct ListScreen {
    store: TodoStore,
    rows: Vec<ListRow>,
}

impl ListScreen {
    /// Takes ownership of `store` and loads the current list.
    pub fn activate(store: TodoStore) -> RepoResult<Self> {
        let mut screen = Self {
            store,
            rows: Vec::new(),
        };
        screen.refresh()?;
        Ok(screen)
    }

    /// Rows in ascending title order as of the last refresh.
    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    /// Re-reads the list from the store.
    pub fn refresh(&mut self) -> RepoResult<()> {
        self.rows = self.store.list()?.into_iter().map(ListRow::from).collect();
        Ok(())
    }

    /// Deletes `id` and refreshes; returns whether a row was removed.
    pub fn remove(&mut self, id: ItemId) -> RepoResult<bool> {
        let deleted = self.store.delete(id)?;
        self.refresh()?;
        Ok(deleted)
    }

    /// Intent for the "new" action.
    pub fn new_item(&self) -> DetailLaunch {
        DetailLaunch::New
    }

    /// Intent for tapping a row.
    pub fn open_item(&self, id: ItemId) -> DetailLaunch {
        DetailLaunch::Edit(id)
    }

    /// Closes the owned store.
    pub fn teardown(self) -> RepoResult<()> {
        self.store.close()
    }
}
