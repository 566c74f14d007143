//! Tests for the JSON file repository against a real filesystem.

use contact_book::error::StorageError;
use contact_book::models::{AddressBook, ContactRecord};
use contact_book::repositories::{AddressBookRepository, JsonFileRepository, STORAGE_VERSION};
use std::fs;
use tempfile::TempDir;

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add(
        ContactRecord::with_details(
            "Taras",
            ["0671234567", "0501112233"],
            Some("15.01.1990"),
            Some("taras@example.com"),
        )
        .unwrap(),
    );
    book.add(ContactRecord::with_details("Olena", ["0991234567"], None, None).unwrap());
    book.add(ContactRecord::new("Iryna").unwrap());
    book
}

#[test]
fn test_load_missing_file_returns_empty_book() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("book.json"));

    let book = repo.load().unwrap();
    assert!(book.is_empty());
}

#[test]
fn test_save_then_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("book.json"));
    let book = sample_book();

    repo.save(&book).unwrap();
    let loaded = repo.load().unwrap();

    assert_eq!(loaded, book);
    let names: Vec<&str> = loaded.iter().map(|r| r.name().as_str()).collect();
    assert_eq!(names, vec!["Taras", "Olena", "Iryna"]);
    for record in &book {
        let reloaded = loaded.get(record.name().as_str()).unwrap();
        assert_eq!(reloaded.phones(), record.phones());
    }
}

#[test]
fn test_save_overwrites_previous_book() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("book.json"));

    repo.save(&sample_book()).unwrap();
    repo.save(&AddressBook::new()).unwrap();

    assert!(repo.load().unwrap().is_empty());
    assert!(!dir.path().join("book.json.tmp").exists());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("book.json");
    let repo = JsonFileRepository::new(&path);

    repo.save(&sample_book()).unwrap();
    assert!(path.exists());
}

#[test]
fn test_saved_document_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    let repo = JsonFileRepository::new(&path);

    let mut book = AddressBook::new();
    book.add(ContactRecord::with_details("Olena", ["0991234567"], Some("03.01.1990"), None).unwrap());
    repo.save(&book).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["version"], STORAGE_VERSION);
    assert_eq!(json["contacts"][0]["name"], "Olena");
    assert_eq!(json["contacts"][0]["phones"][0], "+380991234567");
    assert_eq!(json["contacts"][0]["birthday"], "03.01.1990");
    assert!(json["contacts"][0].get("email").is_none());
}

#[test]
fn test_load_renormalizes_hand_edited_phones() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    fs::write(
        &path,
        r#"{"version":1,"contacts":[{"name":"Olena","phones":["099 123 45 67","380991234567"]}]}"#,
    )
    .unwrap();

    let book = JsonFileRepository::new(&path).load().unwrap();
    let olena = book.get("Olena").unwrap();
    assert_eq!(olena.phones().to_string(), "+380991234567");
}

#[test]
fn test_load_rejects_invalid_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    fs::write(
        &path,
        r#"{"version":1,"contacts":[{"name":"Olena","phones":["12345"]}]}"#,
    )
    .unwrap();

    let result = JsonFileRepository::new(&path).load();
    assert!(matches!(result, Err(StorageError::Json(_))));
}

#[test]
fn test_load_rejects_unknown_version() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    fs::write(&path, r#"{"version":99,"contacts":[]}"#).unwrap();

    let result = JsonFileRepository::new(&path).load();
    assert!(matches!(result, Err(StorageError::UnsupportedVersion(99))));
}

#[test]
fn test_load_rejects_garbage() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    fs::write(&path, "not json at all").unwrap();

    assert!(JsonFileRepository::new(&path).load().is_err());
}
