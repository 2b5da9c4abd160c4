//! Core domain logic for the todo list app.
//! This crate is the single source of truth for item invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod screen;
pub mod store;

pub use config::{ConfigError, StoreConfig, DEFAULT_DB_FILE_NAME};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::item::{done_label, Item, ItemFields, ItemId};
pub use repo::item_repo::{ItemRepository, RepoError, RepoResult, SqliteItemRepository};
pub use screen::detail_screen::{DetailScreen, DetailScreenState, SaveOutcome};
pub use screen::list_screen::{ListRow, ListScreen};
pub use screen::DetailLaunch;
pub use store::TodoStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
