//! Seed file loading end to end.

use phonebook_mcp_server::error::SeedError;
use phonebook_mcp_server::repositories::{InMemoryContactRepository, SequentialIdGenerator};
use phonebook_mcp_server::seed::{apply_seed, load_seed_file};
use phonebook_mcp_server::services::ContactService;
use std::io::Write;
use tempfile::NamedTempFile;

fn service() -> ContactService {
    ContactService::new(Box::new(InMemoryContactRepository::with_id_generator(
        Box::new(SequentialIdGenerator::new()),
    )))
}

fn seed_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_seed_file_populates_service_in_order() {
    let file = seed_file(
        r#"[
            {"name": "Rosie Simpson", "number": "459-12-56"},
            {"name": "Hermione Kline", "number": "443-89-12"},
            {"name": "Eden Clements", "number": "645-17-79"},
            {"name": "Annie Copeland", "number": "227-91-26"}
        ]"#,
    );

    let mut service = service();
    let candidates = load_seed_file(file.path()).unwrap();
    let count = apply_seed(&mut service, &candidates).unwrap();

    assert_eq!(count, 4);
    let ids: Vec<String> = service
        .contacts()
        .iter()
        .map(|c| c.id().to_string())
        .collect();
    assert_eq!(ids, vec!["id-1", "id-2", "id-3", "id-4"]);
    assert_eq!(service.view().contacts[3].name().as_str(), "Annie Copeland");
}

#[test]
fn test_seed_entries_are_trimmed() {
    let file = seed_file(r#"[{"name": "  Adrian ", "number": " +1 555-1234 "}]"#);

    let mut service = service();
    let candidates = load_seed_file(file.path()).unwrap();
    apply_seed(&mut service, &candidates).unwrap();

    let contact = &service.contacts()[0];
    assert_eq!(contact.name().as_str(), "Adrian");
    assert_eq!(contact.number().as_str(), "+1 555-1234");
}

#[test]
fn test_invalid_seed_entry_reports_index() {
    let file = seed_file(
        r#"[
            {"name": "Rosie Simpson", "number": "459-12-56"},
            {"name": "R2D2", "number": "459-12-56"}
        ]"#,
    );

    let mut service = service();
    let candidates = load_seed_file(file.path()).unwrap();
    let err = apply_seed(&mut service, &candidates).unwrap_err();

    assert!(matches!(err, SeedError::InvalidEntry { index: 1, .. }));
    assert!(service.contacts().is_empty());
}

#[test]
fn test_missing_seed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_seed_file(&path).unwrap_err();
    assert!(matches!(err, SeedError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_malformed_seed_file() {
    let file = seed_file("not json");
    assert!(matches!(
        load_seed_file(file.path()),
        Err(SeedError::Json(_))
    ));
}
