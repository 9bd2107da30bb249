use super::{DatasetStore, JsonFileStore, StorageError};

use std::fs;

use anyhow::Result;
use serde_json::{json, Value};
use tempfile::tempdir;

use crate::models::DatasetError;

#[test]
fn test_store_load_and_save_round_trip_the_document() -> Result<()> {
    let directory = tempdir()?;
    let input = directory.path().join("dataset.json");
    let output = directory.path().join("balanced.json");
    let document = json!({
        "transactions": [{ "reference_number": "TX-1", "amount": 12.5, "vendor": "acme" }],
        "payments": [{ "transaction_id": 1, "amount_paid": 12.5, "method": "card" }],
        "total_budget": 900
    });

    fs::write(&input, serde_json::to_string(&document)?)?;

    let store = JsonFileStore::new(&input, &output);
    let dataset = store.load()?;
    store.save(&dataset)?;

    let written: Value = serde_json::from_str(&fs::read_to_string(&output)?)?;

    assert_eq!(written, document);
    assert_eq!(store.output(), output.as_path());

    Ok(())
}

#[test]
fn test_store_save_replaces_existing_output() -> Result<()> {
    let directory = tempdir()?;
    let input = directory.path().join("dataset.json");
    let output = directory.path().join("balanced.json");

    fs::write(&input, r#"{ "transactions": [], "payments": [] }"#)?;
    fs::write(&output, "stale")?;

    let store = JsonFileStore::new(&input, &output);
    store.save(&store.load()?)?;

    let written: Value = serde_json::from_str(&fs::read_to_string(&output)?)?;

    assert_eq!(written, json!({ "transactions": [], "payments": [] }));
    assert_eq!(fs::read_dir(directory.path())?.count(), 2);

    Ok(())
}

#[test]
fn test_store_reports_missing_input_file() -> Result<()> {
    let directory = tempdir()?;
    let store = JsonFileStore::new(directory.path().join("missing.json"), directory.path().join("out.json"));

    assert!(matches!(store.load(), Err(StorageError::Read { .. })));

    Ok(())
}

#[test]
fn test_store_reports_invalid_json() -> Result<()> {
    let directory = tempdir()?;
    let input = directory.path().join("dataset.json");
    fs::write(&input, "{ not json")?;

    let store = JsonFileStore::new(&input, directory.path().join("out.json"));

    assert!(matches!(store.load(), Err(StorageError::Json { .. })));

    Ok(())
}

#[test]
fn test_store_reports_malformed_dataset() -> Result<()> {
    let directory = tempdir()?;
    let input = directory.path().join("dataset.json");
    fs::write(&input, r#"{ "transactions": [], "payments": 3 }"#)?;

    let store = JsonFileStore::new(&input, directory.path().join("out.json"));
    let result = store.load();

    assert!(matches!(result, Err(StorageError::Malformed { source: DatasetError::NotAnArray { collection: "payments" }, .. })));

    Ok(())
}
