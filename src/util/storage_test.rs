use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.read("portfolio-theme"), Ok(None));
}

#[test]
fn memory_store_write_then_read() {
    let store = MemoryStore::new();
    store.write("k", "v1").unwrap();
    store.write("k", "v2").unwrap();
    assert_eq!(store.read("k"), Ok(Some("v2".to_owned())));
    assert_eq!(store.read("other"), Ok(None));
}

#[test]
fn memory_store_with_value_seeds_key() {
    let store = MemoryStore::with_value("k", "light");
    assert_eq!(store.read("k"), Ok(Some("light".to_owned())));
}

#[test]
fn storage_error_messages_name_the_key() {
    let err = StorageError::Write { key: "portfolio-theme".to_owned(), message: "QuotaExceededError".to_owned() };
    assert_eq!(err.to_string(), "storage write failed for portfolio-theme: QuotaExceededError");
    assert_eq!(StorageError::Unavailable.to_string(), "web storage is unavailable");
}
