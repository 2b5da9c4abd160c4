//! Headless screen controllers.
//!
//! # Responsibility
//! - Translate list/detail screen events into item store calls.
//! - Hold the per-screen state a platform shell must keep across restarts.
//!
//! # Invariants
//! - Each controller owns the `TodoStore` it was given and closes it on
//!   teardown; stores are never shared between controllers.
//! - Controllers never render; hosts read `rows()` / `form()` and draw.
//!
//! # Host contract
//! These controllers are not exported through `todo_ffi`, whose API is
//! per-call CRUD. A host that drives the store over FFI must reproduce
//! their behavior: save on every deactivate, `todo_create` only while no id
//! is held, `todo_update` afterwards, and persist `{ item_id }` verbatim
//! across restarts (an update on a vanished id reports `changed=false` and
//! must not fall back to create).

pub mod detail_screen;
pub mod list_screen;

use crate::model::item::ItemId;
use serde::{Deserialize, Serialize};

/// How the detail screen is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "item_id", rename_all = "snake_case")]
pub enum DetailLaunch {
    /// Create a new item; no id is assigned until the first save.
    New,
    /// Edit the existing item with this id.
    Edit(ItemId),
}
