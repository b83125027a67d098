use ticklist_core::{
    DirStorage, Filter, KeyValueStore, ListView, MemoryStorage, Priority, StoreConfig, TaskStore,
    Theme,
};
use tempfile::tempdir;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn milk_and_report_scenario() {
    init_tracing();
    let mut store = TaskStore::new(MemoryStorage::new(), StoreConfig::default());

    store.add("Buy milk", Priority::None);
    store.add("Write report", Priority::High);
    store.toggle_checked(0);

    assert_eq!(store.items_left(), 1);

    store.set_filter(Filter::Completed);
    let view = ListView::build(store.state());
    assert_eq!(view.visible_texts(), vec!["Buy milk"]);
    assert_eq!(view.items_left, 1);

    store.set_filter(Filter::Active);
    let view = ListView::build(store.state());
    assert_eq!(view.visible_texts(), vec!["Write report"]);
    assert_eq!(view.rows[0].priority, Priority::High);
}

#[test]
fn search_term_narrows_visible_rows() {
    init_tracing();
    let mut store = TaskStore::new(MemoryStorage::new(), StoreConfig::default());
    store.add("Buy milk", Priority::None);
    store.add("Write report", Priority::None);

    store.set_search_term("wri");

    let view = ListView::build(store.state());
    assert_eq!(view.visible_texts(), vec!["Write report"]);
    assert_eq!(view.rows[0].index, 1);
}

#[test]
fn tasks_and_theme_survive_reopen() {
    init_tracing();
    let temp = tempdir().expect("tempdir");

    let expected = {
        let storage = DirStorage::open(temp.path()).expect("open storage");
        let cfg = StoreConfig::default().with_stored_theme(&storage);
        let mut store = TaskStore::new(storage, cfg);
        store.load();
        assert!(store.is_empty());

        store.add("Buy milk", Priority::Low);
        store.add("Write report", Priority::High);
        store.add("Call mum", Priority::Medium);
        store.toggle_checked(1);
        store.set_theme(Theme::Light);
        store.tasks().to_vec()
    };

    let storage = DirStorage::open(temp.path()).expect("reopen storage");
    let cfg = StoreConfig::default().with_stored_theme(&storage);
    assert_eq!(cfg.theme, Theme::Light);

    let mut store = TaskStore::new(storage, cfg);
    store.load();
    assert_eq!(store.tasks(), expected.as_slice());
    assert_eq!(store.state().theme, Theme::Light);
}

#[test]
fn malformed_storage_loads_empty_and_recovers() {
    init_tracing();
    let storage = MemoryStorage::new()
        .with_entry("tasks", "not json")
        .with_entry("theme", "purple");
    let cfg = StoreConfig::default().with_stored_theme(&storage);
    let mut store = TaskStore::new(storage, cfg);

    store.load();
    assert!(store.is_empty());
    assert_eq!(store.state().theme, Theme::Dark);

    store.add("Fresh start", Priority::None);
    assert_eq!(
        store.storage().get("tasks").as_deref(),
        Some(r#"[{"text":"Fresh start","isChecked":false,"priority":"none"}]"#)
    );
}

#[test]
fn custom_keys_from_config_are_honoured() {
    init_tracing();
    let cfg = StoreConfig::from_toml_str(
        r#"
[storage]
tasks_key = "ticklist.tasks"
theme_key = "ticklist.theme"
"#,
    )
    .expect("parse config");

    let mut store = TaskStore::new(MemoryStorage::new(), cfg);
    store.add("Namespaced", Priority::None);
    store.set_theme(Theme::Light);

    assert!(store.storage().get("tasks").is_none());
    assert!(store.storage().get("ticklist.tasks").is_some());
    assert_eq!(store.storage().get("ticklist.theme").as_deref(), Some("light"));
}

#[test]
fn load_replaces_in_memory_tasks() {
    init_tracing();
    let stored = r#"[{"text":"From disk","isChecked":true,"priority":"medium"}]"#;
    let mut store = TaskStore::new(
        MemoryStorage::new().with_entry("tasks", stored),
        StoreConfig::default(),
    );

    store.load();

    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].text, "From disk");
    assert!(store.tasks()[0].is_checked);
    assert_eq!(store.tasks()[0].priority, Priority::Medium);
    assert_eq!(store.items_left(), 0);
}
