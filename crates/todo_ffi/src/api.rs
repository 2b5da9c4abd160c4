//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the item store operations to Dart via FRB.
//! - Flatten core errors into `ok` + `message` envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Each call opens its own store and closes it before returning.
//! - The database location is fixed by the first successful
//!   `configure_store` call for the process lifetime.
//! - Store calls made before `configure_store` fail with `ok=false`; there
//!   is no fallback location.

use log::warn;
use std::sync::OnceLock;
use todo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Item, ItemFields, ItemId, RepoResult, StoreConfig, TodoStore,
};

const STORE_NOT_CONFIGURED: &str = "store not configured; call configure_store first";

static STORE_CONFIG: OnceLock<StoreConfig> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Points the store at `<db_dir>/tododb.sqlite3`.
///
/// # FFI contract
/// - `db_dir` must be absolute (usually the app documents directory).
/// - First successful call wins; repeating it with the same directory is
///   accepted, a different directory is rejected.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_store(db_dir: String) -> String {
    let config = match StoreConfig::in_dir(db_dir.as_str()) {
        Ok(config) => config,
        Err(err) => return err.to_string(),
    };

    let active = STORE_CONFIG.get_or_init(|| config.clone());
    if *active == config {
        String::new()
    } else {
        format!(
            "store already configured at `{}`; refusing to switch to `{}`",
            active.db_path.display(),
            config.db_path.display()
        )
    }
}

/// Flat item shape for Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItemView {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub done: bool,
    /// `" (done) "` for completed items, empty otherwise.
    pub status_label: String,
}

impl From<Item> for TodoItemView {
    fn from(item: Item) -> Self {
        Self {
            status_label: item.done_label().to_string(),
            id: item.id,
            title: item.title,
            body: item.body,
            done: item.done,
        }
    }
}

/// Response envelope for create/update/delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoActionResponse {
    /// Whether the call reached the store without error.
    pub ok: bool,
    /// Created id for `todo_create`, echoed id otherwise.
    pub item_id: Option<i64>,
    /// Whether a row was written or removed (`false` for unknown ids).
    pub changed: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TodoActionResponse {
    fn success(item_id: ItemId, changed: bool, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            item_id: Some(item_id),
            changed,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            item_id: None,
            changed: false,
            message: message.into(),
        }
    }
}

/// Response envelope for `todo_get`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoGetResponse {
    pub ok: bool,
    /// `None` when the id is unknown or the call failed.
    pub item: Option<TodoItemView>,
    pub message: String,
}

/// Response envelope for `todo_list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListResponse {
    pub ok: bool,
    /// Items sorted by title ascending.
    pub items: Vec<TodoItemView>,
    pub message: String,
}

/// Creates one item and returns its id.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_create(title: String, body: String, done: bool) -> TodoActionResponse {
    let fields = ItemFields { title, body, done };
    match with_store(|store| store.create(&fields)) {
        Ok(id) => TodoActionResponse::success(id, true, "Item created."),
        Err(err) => TodoActionResponse::failure(format!("todo_create failed: {err}")),
    }
}

/// Gets one item by id.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_get(id: i64) -> TodoGetResponse {
    match with_store(|store| store.get(id)) {
        Ok(Some(item)) => TodoGetResponse {
            ok: true,
            item: Some(item.into()),
            message: "Item found.".to_string(),
        },
        Ok(None) => TodoGetResponse {
            ok: true,
            item: None,
            message: format!("Item {id} not found."),
        },
        Err(err) => TodoGetResponse {
            ok: false,
            item: None,
            message: format!("todo_get failed: {err}"),
        },
    }
}

/// Lists all items sorted by title.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_list() -> TodoListResponse {
    match with_store(TodoStore::list) {
        Ok(items) => {
            let items = items.into_iter().map(TodoItemView::from).collect::<Vec<_>>();
            let message = if items.is_empty() {
                "No items.".to_string()
            } else {
                format!("Found {} item(s).", items.len())
            };
            TodoListResponse {
                ok: true,
                items,
                message,
            }
        }
        Err(err) => TodoListResponse {
            ok: false,
            items: Vec::new(),
            message: format!("todo_list failed: {err}"),
        },
    }
}

/// Overwrites one item; `changed=false` when the id is unknown.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_update(id: i64, title: String, body: String, done: bool) -> TodoActionResponse {
    let fields = ItemFields { title, body, done };
    match with_store(|store| store.update(id, &fields)) {
        Ok(true) => TodoActionResponse::success(id, true, "Item updated."),
        Ok(false) => TodoActionResponse::success(id, false, format!("Item {id} not found.")),
        Err(err) => TodoActionResponse::failure(format!("todo_update failed: {err}")),
    }
}

/// Deletes one item; `changed=false` when the id is unknown.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_delete(id: i64) -> TodoActionResponse {
    match with_store(|store| store.delete(id)) {
        Ok(true) => TodoActionResponse::success(id, true, "Item deleted."),
        Ok(false) => TodoActionResponse::success(id, false, format!("Item {id} not found.")),
        Err(err) => TodoActionResponse::failure(format!("todo_delete failed: {err}")),
    }
}

fn with_store<T>(f: impl FnOnce(&TodoStore) -> RepoResult<T>) -> Result<T, String> {
    with_configured_store(STORE_CONFIG.get(), f)
}

fn with_configured_store<T>(
    config: Option<&StoreConfig>,
    f: impl FnOnce(&TodoStore) -> RepoResult<T>,
) -> Result<T, String> {
    let config = config.ok_or_else(|| STORE_NOT_CONFIGURED.to_string())?;
    let store = TodoStore::open_with(config).map_err(|err| format!("store open failed: {err}"))?;
    let result = f(&store).map_err(|err| err.to_string());
    if let Err(err) = store.close() {
        warn!("event=ffi_store_close module=ffi status=error error={err}");
    }
    result
}
