//! Detail screen controller.
//!
//! # Responsibility
//! - Load one item into an editable form, or start an empty one.
//! - Save the form whenever the screen loses focus.
//! - Expose the only state that must survive a platform-initiated restart:
//!   the assigned item id.
//!
//! # Invariants
//! - The first save of a new item creates it; every later save updates it.
//! - A saved id is never dropped, even if its row disappears.

use super::DetailLaunch;
use crate::model::item::{ItemFields, ItemId};
use crate::repo::item_repo::RepoResult;
use crate::store::TodoStore;
use log::warn;
use serde::{Deserialize, Serialize};

/// Transient state persisted by the host before an abrupt teardown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailScreenState {
    pub item_id: Option<ItemId>,
}

/// Result of saving the form on deactivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(ItemId),
    Updated(ItemId),
    /// The item was deleted elsewhere; nothing was written.
    Missing(ItemId),
}

/// Controller for creating or editing one item.
pub struct DetailScreen {
    store: TodoStore,
    item_id: Option<ItemId>,
    form: ItemFields,
}

impl DetailScreen {
    /// Opens the screen for `launch`, loading the item when editing.
    ///
    /// An `Edit` whose id no longer exists starts a fresh, unsaved item.
    pub fn launch(store: TodoStore, launch: DetailLaunch) -> RepoResult<Self> {
        let mut screen = Self {
            store,
            item_id: None,
            form: ItemFields::default(),
        };

        if let DetailLaunch::Edit(id) = launch {
            match screen.store.get(id)? {
                Some(item) => {
                    screen.form = item.fields();
                    screen.item_id = Some(item.id);
                }
                None => {
                    warn!("event=detail_launch module=screen status=missing item_id={id}");
                }
            }
        }

        Ok(screen)
    }

    /// Recreates the screen from state saved by [`DetailScreen::save_state`].
    ///
    /// The saved id is kept verbatim. When its row is gone the form stays
    /// empty and the next save reports [`SaveOutcome::Missing`].
    pub fn restore(store: TodoStore, state: DetailScreenState) -> RepoResult<Self> {
        let mut screen = Self {
            store,
            item_id: state.item_id,
            form: ItemFields::default(),
        };

        if let Some(id) = state.item_id {
            match screen.store.get(id)? {
                Some(item) => screen.form = item.fields(),
                None => {
                    warn!("event=detail_restore module=screen status=missing item_id={id}");
                }
            }
        }

        Ok(screen)
    }

    /// Id of the item being edited, `None` until the first save of a new item.
    pub fn item_id(&self) -> Option<ItemId> {
        self.item_id
    }

    pub fn form(&self) -> &ItemFields {
        &self.form
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.form.body = body.into();
    }

    pub fn set_done(&mut self, done: bool) {
        self.form.done = done;
    }

    /// Saves the form; called whenever the screen loses focus.
    pub fn deactivate(&mut self) -> RepoResult<SaveOutcome> {
        match self.item_id {
            Some(id) => {
                if self.store.update(id, &self.form)? {
                    Ok(SaveOutcome::Updated(id))
                } else {
                    warn!("event=detail_save module=screen status=missing item_id={id}");
                    Ok(SaveOutcome::Missing(id))
                }
            }
            None => {
                let id = self.store.create(&self.form)?;
                self.item_id = Some(id);
                Ok(SaveOutcome::Created(id))
            }
        }
    }

    /// State the host must keep to survive a restart.
    pub fn save_state(&self) -> DetailScreenState {
        DetailScreenState {
            item_id: self.item_id,
        }
    }

    /// The "done" action: behaves like back, so it saves then closes.
    pub fn finish(mut self) -> RepoResult<SaveOutcome> {
        let outcome = self.deactivate()?;
        self.store.close()?;
        Ok(outcome)
    }

    /// Closes the owned store without saving.
    pub fn teardown(self) -> RepoResult<()> {
        self.store.close()
    }
}
