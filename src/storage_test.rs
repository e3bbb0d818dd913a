#![cfg(not(feature = "hydrate"))]

use super::*;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Draft {
    title: String,
}

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::default();
    assert_eq!(storage.get_item("k").unwrap(), None);

    storage.set_item("k", "v").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
    assert!(storage.contains_key("k"));

    storage.remove_item("k").unwrap();
    assert!(!storage.contains_key("k"));
    assert!(storage.is_empty());
}

#[test]
fn remove_of_absent_key_is_ok() {
    let storage = MemoryStorage::default();
    assert!(storage.remove_item("missing").is_ok());
}

#[test]
fn save_then_load_json() {
    let storage = MemoryStorage::default();
    save_json(&storage, "draft", &Draft { title: "Alien".to_owned() }).unwrap();
    assert_eq!(storage.get_item("draft").unwrap().as_deref(), Some(r#"{"title":"Alien"}"#));
    let loaded: Option<Draft> = load_json(&storage, "draft");
    assert_eq!(loaded, Some(Draft { title: "Alien".to_owned() }));
}

#[test]
fn load_json_treats_malformed_value_as_absent() {
    let storage = MemoryStorage::default();
    storage.set_item("draft", "{not json").unwrap();
    let loaded: Option<Draft> = load_json(&storage, "draft");
    assert!(loaded.is_none());
}

#[test]
fn load_json_treats_wrong_shape_as_absent() {
    let storage = MemoryStorage::default();
    storage.set_item("draft", "42").unwrap();
    let loaded: Option<Draft> = load_json(&storage, "draft");
    assert!(loaded.is_none());
}

#[test]
fn browser_storage_without_hydrate_reads_nothing_and_refuses_writes() {
    let storage = BrowserStorage;
    assert_eq!(storage.get_item("auth-session").unwrap(), None);
    assert!(matches!(storage.set_item("auth-session", "{}"), Err(StorageError::Unavailable)));
    assert!(matches!(storage.remove_item("auth-session"), Err(StorageError::Unavailable)));
}

#[test]
fn default_storage_without_hydrate_is_writable() {
    let storage = default_storage();
    storage.set_item("k", "v").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
}
