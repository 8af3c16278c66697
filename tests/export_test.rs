//! Integration tests for CSV export and JSON backup.

use contact_book::export::{export_csv, write_backup, EXPORT_COLUMNS};
use contact_book::models::NewContact;
use contact_book::store::{ContactStore, LoadStatus};
use std::fs;
use tempfile::tempdir;

fn populated_store(path: &std::path::Path) -> ContactStore {
    let (mut store, _) = ContactStore::load(path).expect("Failed to load store");
    store
        .add(NewContact {
            name: "Alice".to_string(),
            phone: "987-654-3210".to_string(),
            email: Some("alice@example.com".to_string()),
            address: Some("12 Elm St".to_string()),
            group: Some("Friends".to_string()),
        })
        .expect("Failed to add Alice");
    store
        .add(NewContact {
            name: "Bob".to_string(),
            phone: "1234567890".to_string(),
            email: None,
            address: None,
            group: None,
        })
        .expect("Failed to add Bob");
    store
}

#[test]
fn test_export_writes_header_and_one_row_per_record() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let store = populated_store(&temp_dir.path().join("contacts.json"));
    let csv_path = temp_dir.path().join("export.csv");

    export_csv(&store, &csv_path).expect("Export failed");

    let content = fs::read_to_string(&csv_path).expect("Failed to read export");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], EXPORT_COLUMNS.join(","));
    assert!(lines[1].starts_with("Alice,9876543210,alice@example.com,12 Elm St,Friends,"));
    // Optional fields export as empty columns
    assert!(lines[2].starts_with("Bob,1234567890,,,Other,"));
}

#[test]
fn test_export_empty_store_is_header_only() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let (store, _) = ContactStore::load(temp_dir.path().join("contacts.json"))
        .expect("Failed to load store");
    let csv_path = temp_dir.path().join("export.csv");

    export_csv(&store, &csv_path).expect("Export failed");

    let content = fs::read_to_string(&csv_path).expect("Failed to read export");
    assert_eq!(content.lines().count(), 1);
    assert_eq!(content.lines().next(), Some(EXPORT_COLUMNS.join(",").as_str()));
}

#[test]
fn test_export_overwrites_existing_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let store = populated_store(&temp_dir.path().join("contacts.json"));
    let csv_path = temp_dir.path().join("export.csv");
    fs::write(&csv_path, "stale export contents").expect("Failed to seed file");

    export_csv(&store, &csv_path).expect("Export failed");

    let content = fs::read_to_string(&csv_path).expect("Failed to read export");
    assert!(content.starts_with("name,phone,email,address,group,created_at,updated_at"));
    assert!(!content.contains("stale export contents"));
}

#[test]
fn test_backup_is_loadable_as_an_equal_store() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let store = populated_store(&temp_dir.path().join("contacts.json"));
    let backup_path = temp_dir.path().join("contacts_backup.json");

    write_backup(&store, &backup_path).expect("Backup failed");

    let (restored, status) = ContactStore::load(&backup_path).expect("Failed to load backup");
    assert_eq!(status, LoadStatus::Loaded);
    assert_eq!(restored.contacts(), store.contacts());
}

#[test]
fn test_backup_overwrites_single_slot() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let mut store = populated_store(&temp_dir.path().join("contacts.json"));
    let backup_path = temp_dir.path().join("contacts_backup.json");

    write_backup(&store, &backup_path).expect("Backup failed");
    store.delete("Bob").expect("Failed to delete Bob");
    write_backup(&store, &backup_path).expect("Second backup failed");

    let (restored, _) = ContactStore::load(&backup_path).expect("Failed to load backup");
    assert_eq!(restored.len(), 1);
    assert!(restored.get("Bob").is_none());
}
