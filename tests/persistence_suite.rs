use finboard_core::{
    ledger::{ExpenseDraft, ExpenseLedger},
    storage::{JsonStorage, StorageBackend},
};

use chrono::NaiveDate;
use tempfile::TempDir;

fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
    let temp = TempDir::new().expect("temp dir");
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
    (storage, temp)
}

#[test]
fn mirrored_slot_round_trips_after_each_mutation() {
    let (storage, _guard) = storage_with_temp_dir();
    let mut ledger = ExpenseLedger::with_mock_data();

    let draft = ExpenseDraft {
        title: "Concert Tickets".into(),
        amount: "60".into(),
        category: "Entertainment".into(),
        date: NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
    };
    ledger.add(&draft).expect("valid draft");
    storage.save(ledger.expenses()).expect("save after add");
    assert_eq!(storage.load().expect("load"), ledger.expenses());

    let first_id = ledger.expenses()[0].id.clone();
    ledger.delete(&first_id);
    storage.save(ledger.expenses()).expect("save after delete");
    assert_eq!(storage.load().expect("load"), ledger.expenses());
}

#[test]
fn slot_holds_a_json_array_of_records() {
    let (storage, _guard) = storage_with_temp_dir();
    let ledger = ExpenseLedger::with_mock_data();
    storage.save(ledger.expenses()).expect("save expenses");

    let raw = std::fs::read_to_string(storage.slot_path()).expect("read slot");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    let records = value.as_array().expect("array slot");
    assert_eq!(records.len(), 5);
    assert_eq!(records[0]["title"], "Grocery Shopping");
    assert_eq!(records[0]["date"], "2024-01-15");
}

#[test]
fn startup_seed_ignores_prior_slot_contents() {
    let (storage, _guard) = storage_with_temp_dir();
    storage.save(&[]).expect("save empty slot");

    // The dashboard always boots from the mock list.
    let ledger = ExpenseLedger::with_mock_data();
    assert_eq!(ledger.len(), 5);
}
