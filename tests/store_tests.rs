use recipe_picker::recipe::Recipe;
use recipe_picker::storage::{FileStore, KeyValueStore, MemoryStore};
use recipe_picker::store::{RecipeStore, API_KEY_KEY, RECIPES_KEY};

fn custom(id: &str, name: &str) -> Recipe {
    Recipe::custom(
        id.to_string(),
        name.to_string(),
        vec!["食材".to_string()],
        "素菜/蛋/主食".to_string(),
    )
}

#[test]
fn empty_storage_loads_builtins_and_no_user_recipes() {
    let store = RecipeStore::load(MemoryStore::new());
    assert!(store.user().is_empty());
    assert_eq!(store.merged().len(), store.builtin().len());
    assert_eq!(store.api_key(), "");
}

#[test]
fn corrupt_stored_list_falls_back_to_empty() {
    let storage = MemoryStore::with_entry(RECIPES_KEY, "this is { not json");
    let store = RecipeStore::load(storage);
    assert!(store.user().is_empty());
}

#[test]
fn stored_records_without_is_custom_flag_still_load() {
    let raw = r#"[{"id":"user-1","name":"旧菜","ingredients":["米"],"category":"素菜/蛋/主食"}]"#;
    let store = RecipeStore::load(MemoryStore::with_entry(RECIPES_KEY, raw));
    assert_eq!(store.user().len(), 1);
    assert!(!store.user()[0].is_custom);
}

#[test]
fn add_prepends_to_the_user_list() {
    let mut store = RecipeStore::load(MemoryStore::new());
    store.add(custom("user-1", "第一道")).unwrap();
    store.add(custom("user-2", "第二道")).unwrap();
    assert_eq!(store.user()[0].id, "user-2");
    assert_eq!(store.user()[1].id, "user-1");

    // Merged order: built-ins first, then user list.
    let merged = store.merged();
    assert_eq!(merged[store.builtin().len()].id, "user-2");
}

#[test]
fn remove_of_absent_id_is_a_noop() {
    let mut store = RecipeStore::load(MemoryStore::new());
    store.add(custom("user-1", "第一道")).unwrap();
    store.remove("user-does-not-exist").unwrap();
    assert_eq!(store.user().len(), 1);
}

#[test]
fn user_list_round_trips_through_the_file_store() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = RecipeStore::load(FileStore::new(dir.path()));
        store.add(custom("user-1", "第一道")).unwrap();
        store.add(custom("user-2", "第二道")).unwrap();
        store.remove("user-1").unwrap();
    }

    let reloaded = RecipeStore::load(FileStore::new(dir.path()));
    assert_eq!(reloaded.user().len(), 1);
    assert_eq!(reloaded.user()[0], custom("user-2", "第二道"));
}

#[test]
fn api_key_round_trips_and_defaults_to_empty() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = RecipeStore::load(FileStore::new(dir.path()));
        assert_eq!(store.api_key(), "");
        store.save_api_key("sk-test-123".to_string()).unwrap();
    }

    let reloaded = RecipeStore::load(FileStore::new(dir.path()));
    assert_eq!(reloaded.api_key(), "sk-test-123");
}

#[test]
fn file_store_treats_missing_keys_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let mut fs = FileStore::new(dir.path().join("nested"));
    assert!(fs.get("no_such_key").is_none());

    fs.set(API_KEY_KEY, "value").unwrap();
    assert_eq!(fs.get(API_KEY_KEY).as_deref(), Some("value"));
}
