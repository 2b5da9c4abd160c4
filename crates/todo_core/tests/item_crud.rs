use rusqlite::Connection;
use todo_core::db::migrations::latest_version;
use todo_core::db::open_db_in_memory;
use todo_core::{ItemFields, ItemRepository, RepoError, SqliteItemRepository, TodoStore};

#[test]
fn create_and_get_roundtrip() {
    let store = TodoStore::open_in_memory().unwrap();

    let fields = ItemFields::new("Buy milk", "2%").with_done(true);
    let id = store.create(&fields).unwrap();

    let loaded = store.get(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.title, "Buy milk");
    assert_eq!(loaded.body, "2%");
    assert!(loaded.done);
}

#[test]
fn create_assigns_fresh_ids() {
    let store = TodoStore::open_in_memory().unwrap();

    let first = store.create(&ItemFields::new("a", "")).unwrap();
    let second = store.create(&ItemFields::new("a", "")).unwrap();
    assert_ne!(first, second);

    store.delete(second).unwrap();
    let third = store.create(&ItemFields::new("c", "")).unwrap();
    assert!(third > second, "deleted ids must not be reused");
}

#[test]
fn empty_title_is_accepted() {
    let store = TodoStore::open_in_memory().unwrap();

    let id = store.create(&ItemFields::new("", "")).unwrap();
    assert_eq!(store.get(id).unwrap().unwrap().title, "");
}

#[test]
fn get_unknown_id_returns_none() {
    let store = TodoStore::open_in_memory().unwrap();
    assert!(store.get(42).unwrap().is_none());
}

#[test]
fn update_existing_item() {
    let store = TodoStore::open_in_memory().unwrap();
    let id = store.create(&ItemFields::new("draft", "body")).unwrap();

    let changed = store
        .update(id, &ItemFields::new("final", "new body").with_done(true))
        .unwrap();
    assert!(changed);

    let loaded = store.get(id).unwrap().unwrap();
    assert_eq!(loaded.title, "final");
    assert_eq!(loaded.body, "new body");
    assert!(loaded.done);
}

#[test]
fn update_with_identical_values_still_reports_changed() {
    let store = TodoStore::open_in_memory().unwrap();
    let fields = ItemFields::new("same", "same");
    let id = store.create(&fields).unwrap();

    assert!(store.update(id, &fields).unwrap());
}

#[test]
fn update_unknown_id_returns_false_without_effect() {
    let store = TodoStore::open_in_memory().unwrap();
    let id = store.create(&ItemFields::new("keep", "me")).unwrap();

    let changed = store.update(id + 100, &ItemFields::new("x", "y")).unwrap();
    assert!(!changed);

    let items = store.list().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "keep");
}

#[test]
fn delete_twice_reports_true_then_false() {
    let store = TodoStore::open_in_memory().unwrap();
    let id = store.create(&ItemFields::new("gone", "")).unwrap();

    assert!(store.delete(id).unwrap());
    assert!(store.get(id).unwrap().is_none());
    assert!(!store.delete(id).unwrap());
}

#[test]
fn list_orders_by_title_ascending() {
    let store = TodoStore::open_in_memory().unwrap();
    for title in ["b", "a", "c"] {
        store.create(&ItemFields::new(title, "")).unwrap();
    }

    let titles: Vec<_> = store
        .list()
        .unwrap()
        .into_iter()
        .map(|item| item.title)
        .collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
}

#[test]
fn list_uses_binary_collation_and_id_tiebreak() {
    let store = TodoStore::open_in_memory().unwrap();
    let lower = store.create(&ItemFields::new("apple", "")).unwrap();
    let upper = store.create(&ItemFields::new("Zebra", "")).unwrap();
    let dup_first = store.create(&ItemFields::new("mango", "1")).unwrap();
    let dup_second = store.create(&ItemFields::new("mango", "2")).unwrap();

    let ids: Vec<_> = store.list().unwrap().into_iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![upper, lower, dup_first, dup_second]);
}

#[test]
fn list_rereads_current_state() {
    let store = TodoStore::open_in_memory().unwrap();
    assert!(store.list().unwrap().is_empty());

    let id = store.create(&ItemFields::new("later", "")).unwrap();
    assert_eq!(store.list().unwrap().len(), 1);

    store.delete(id).unwrap();
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn buy_milk_pay_rent_scenario() {
    let store = TodoStore::open_in_memory().unwrap();

    let milk = store.create(&ItemFields::new("Buy milk", "2%")).unwrap();
    let rent = store.create(&ItemFields::new("Pay rent", "")).unwrap();
    assert_eq!((milk, rent), (1, 2));

    assert!(store
        .update(milk, &ItemFields::new("Buy milk", "2%").with_done(true))
        .unwrap());

    let listed: Vec<_> = store
        .list()
        .unwrap()
        .into_iter()
        .map(|item| (item.title, item.done))
        .collect();
    assert_eq!(
        listed,
        vec![("Buy milk".to_string(), true), ("Pay rent".to_string(), false)]
    );

    assert!(store.delete(rent).unwrap());
    let remaining = store.list().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "Buy milk");
    assert!(remaining[0].done);
}

#[test]
fn done_flag_is_stored_as_zero_or_one() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();
    let open = repo.create_item(&ItemFields::new("open", "")).unwrap();
    let closed = repo
        .create_item(&ItemFields::new("closed", "").with_done(true))
        .unwrap();

    let state_of = |id: i64| -> i64 {
        conn.query_row("SELECT state FROM todo WHERE id = ?1;", [id], |row| {
            row.get(0)
        })
        .unwrap()
    };
    assert_eq!(state_of(open), 0);
    assert_eq!(state_of(closed), 1);
}

#[test]
fn close_releases_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.db");

    let store = TodoStore::open(&path).unwrap();
    let id = store.create(&ItemFields::new("persisted", "body")).unwrap();
    store.close().unwrap();

    let reopened = TodoStore::open(&path).unwrap();
    assert_eq!(reopened.get(id).unwrap().unwrap().title, "persisted");
    reopened.close().unwrap();
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteItemRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_todo_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteItemRepository::try_new(&conn);
    assert!(matches!(result, Err(RepoError::MissingRequiredTable("todo"))));
}

#[test]
fn repository_rejects_connection_missing_state_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE todo (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            body TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteItemRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "todo",
            column: "state"
        })
    ));
}
