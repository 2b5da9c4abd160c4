//! Item domain model.
//!
//! # Responsibility
//! - Define the one persisted record of the todo list.
//! - Keep the writable fields separate from store-assigned identity.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes afterwards.
//! - `done` is a plain bool in memory; its 0/1 encoding lives in the repo.

use serde::{Deserialize, Serialize};

/// Store-assigned row identifier (SQLite rowid, monotonic, never reused).
pub type ItemId = i64;

/// Label shown next to a completed item in list rows.
pub const DONE_LABEL: &str = " (done) ";

/// Writable fields of one todo item.
///
/// Used as the payload for both create and update, so callers never
/// supply an id on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub title: String,
    pub body: String,
    pub done: bool,
}

impl ItemFields {
    /// Creates fields for a not-yet-done item.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            done: false,
        }
    }

    /// Returns a copy with the done flag replaced.
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

/// One persisted todo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub body: String,
    pub done: bool,
}

impl Item {
    /// Joins a store-assigned id with its persisted fields.
    pub fn from_fields(id: ItemId, fields: ItemFields) -> Self {
        Self {
            id,
            title: fields.title,
            body: fields.body,
            done: fields.done,
        }
    }

    /// Returns the writable part of this item.
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            title: self.title.clone(),
            body: self.body.clone(),
            done: self.done,
        }
    }

    /// Display suffix for this item's done flag.
    pub fn done_label(&self) -> &'static str {
        done_label(self.done)
    }
}

/// Maps the done flag to its list-row suffix: `" (done) "` or empty.
pub fn done_label(done: bool) -> &'static str {
    if done {
        DONE_LABEL
    } else {
        ""
    }
}
