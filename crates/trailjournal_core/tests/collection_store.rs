use trailjournal_core::db::open_db_in_memory;
use trailjournal_core::{
    CollectionStore, DailyDraft, DailyEntry, KeyValueStore, KvError, KvResult, LoadOutcome,
    MemoryKeyValueStore, SqliteKeyValueStore, DAILY_ENTRIES_KEY,
};

/// Backend that fails every operation, standing in for disabled or
/// quota-exhausted storage.
struct FailingStore;

impl KeyValueStore for FailingStore {
    fn read(&self, _key: &str) -> KvResult<Option<String>> {
        Err(KvError::Backend("storage disabled".to_string()))
    }

    fn write(&self, _key: &str, _value: &str) -> KvResult<()> {
        Err(KvError::Backend("storage disabled".to_string()))
    }

    fn remove(&self, _key: &str) -> KvResult<()> {
        Err(KvError::Backend("storage disabled".to_string()))
    }
}

fn sample_entry(day: u32, miles: f64) -> DailyEntry {
    DailyDraft {
        date: chrono::NaiveDate::from_ymd_opt(2024, 6, day),
        miles: Some(miles),
        start_location: Some("camp".to_string()),
        end_location: Some("camp".to_string()),
        ..DailyDraft::default()
    }
    .finalize()
    .unwrap()
}

fn sqlite_store() -> CollectionStore {
    let conn = open_db_in_memory().unwrap();
    CollectionStore::with_backend(Box::new(SqliteKeyValueStore::new(conn)), true)
}

#[test]
fn bind_with_no_persisted_value_is_ready_with_default() {
    let store = sqlite_store();
    let handle = store.bind::<Vec<DailyEntry>>(DAILY_ENTRIES_KEY, Vec::new());

    assert!(handle.is_ready());
    assert_eq!(handle.load_outcome(), LoadOutcome::Missing);
    assert!(handle.get().is_empty());
}

#[test]
fn written_collections_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.db");

    let entries = vec![sample_entry(10, 7.8), sample_entry(11, 12.3)];
    {
        let store = CollectionStore::open(&path);
        assert!(store.durable());
        let handle = store.bind(DAILY_ENTRIES_KEY, Vec::new());
        handle.set(entries.clone());
    }

    let reopened = CollectionStore::open(&path);
    let handle = reopened.bind::<Vec<DailyEntry>>(DAILY_ENTRIES_KEY, Vec::new());
    assert_eq!(handle.load_outcome(), LoadOutcome::Loaded);
    assert_eq!(handle.get(), entries);
}

#[test]
fn unparsable_persisted_value_falls_back_to_default() {
    let backend = MemoryKeyValueStore::default();
    backend.write(DAILY_ENTRIES_KEY, "definitely not json").unwrap();

    let store = CollectionStore::with_backend(Box::new(backend), false);
    let handle = store.bind::<Vec<DailyEntry>>(DAILY_ENTRIES_KEY, Vec::new());

    assert!(handle.is_ready());
    assert!(matches!(handle.load_outcome(), LoadOutcome::Fallback { .. }));
    assert!(handle.get().is_empty());
}

#[test]
fn failing_backend_still_reaches_ready_and_stays_usable() {
    let store = CollectionStore::with_backend(Box::new(FailingStore), false);
    let handle = store.bind::<Vec<DailyEntry>>(DAILY_ENTRIES_KEY, Vec::new());

    assert!(handle.is_ready());
    assert!(matches!(handle.load_outcome(), LoadOutcome::Fallback { .. }));

    // Writes fail to persist but the in-memory value stays authoritative.
    let entry = sample_entry(10, 7.8);
    handle.set(vec![entry.clone()]);
    assert_eq!(handle.get(), vec![entry]);
}

#[test]
fn unopenable_database_degrades_to_memory_backend() {
    let dir = tempfile::tempdir().unwrap();
    // A directory is not an openable database file.
    let store = CollectionStore::open(dir.path());

    assert!(!store.durable());
    let handle = store.bind::<Vec<DailyEntry>>(DAILY_ENTRIES_KEY, Vec::new());
    assert!(handle.is_ready());
    handle.set(vec![sample_entry(10, 7.8)]);
    assert_eq!(handle.get().len(), 1);
}

#[test]
fn handles_for_one_key_observe_each_others_writes() {
    let store = sqlite_store();
    let writer = store.bind::<Vec<DailyEntry>>(DAILY_ENTRIES_KEY, Vec::new());
    let reader = store.bind::<Vec<DailyEntry>>(DAILY_ENTRIES_KEY, Vec::new());

    let entry = sample_entry(10, 7.8);
    writer.set(vec![entry.clone()]);

    assert_eq!(reader.get(), vec![entry]);
}

#[test]
fn update_derives_from_latest_value() {
    let store = sqlite_store();
    let handle = store.bind::<Vec<DailyEntry>>(DAILY_ENTRIES_KEY, Vec::new());

    handle.set(vec![sample_entry(10, 7.8)]);
    handle.update(|mut entries| {
        entries.push(sample_entry(11, 12.3));
        entries
    });

    let entries = handle.get();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].miles, 7.8);
    assert_eq!(entries[1].miles, 12.3);
}

#[test]
fn records_persisted_before_newer_optional_fields_still_load() {
    // Shape written by an earlier build: no elevation, weather, or flag
    // fields at all, and a JavaScript-style ISO timestamp.
    let legacy = r#"[{
        "id": "1718000000000",
        "date": "2024-06-10T00:00:00.000Z",
        "section": 1,
        "startLocation": "Springer Mountain Shelter",
        "endLocation": "Hawk Mountain Shelter",
        "miles": 7.8
    }]"#;

    let backend = MemoryKeyValueStore::default();
    backend.write(DAILY_ENTRIES_KEY, legacy).unwrap();

    let store = CollectionStore::with_backend(Box::new(backend), false);
    let handle = store.bind::<Vec<DailyEntry>>(DAILY_ENTRIES_KEY, Vec::new());

    assert_eq!(handle.load_outcome(), LoadOutcome::Loaded);
    let entries = handle.get();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "1718000000000");
    assert_eq!(entries[0].start_location, "Springer Mountain Shelter");
    assert_eq!(entries[0].elevation_gain, None);
    assert_eq!(entries[0].notes, None);
}

#[test]
fn all_four_collections_round_trip_through_reopen() {
    use trailjournal_core::{
        demo_collections, Expense, GearItem, JournalEntry, EXPENSES_KEY, GEAR_KEY,
        JOURNAL_ENTRIES_KEY,
    };

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.db");
    let demo = demo_collections();

    {
        let store = CollectionStore::open(&path);
        store
            .bind(DAILY_ENTRIES_KEY, Vec::new())
            .set(demo.daily_entries.clone());
        store
            .bind(JOURNAL_ENTRIES_KEY, Vec::new())
            .set(demo.journal_entries.clone());
        store.bind(EXPENSES_KEY, Vec::new()).set(demo.expenses.clone());
        store.bind(GEAR_KEY, Vec::new()).set(demo.gear.clone());
    }

    let reopened = CollectionStore::open(&path);
    assert_eq!(
        reopened.bind::<Vec<DailyEntry>>(DAILY_ENTRIES_KEY, Vec::new()).get(),
        demo.daily_entries
    );
    assert_eq!(
        reopened
            .bind::<Vec<JournalEntry>>(JOURNAL_ENTRIES_KEY, Vec::new())
            .get(),
        demo.journal_entries
    );
    assert_eq!(
        reopened.bind::<Vec<Expense>>(EXPENSES_KEY, Vec::new()).get(),
        demo.expenses
    );
    assert_eq!(
        reopened.bind::<Vec<GearItem>>(GEAR_KEY, Vec::new()).get(),
        demo.gear
    );
}

#[test]
fn serialized_shape_uses_camel_case_wire_names() {
    let entry = sample_entry(10, 7.8);
    let json = serde_json::to_value(&entry).unwrap();

    assert!(json.get("startLocation").is_some());
    assert!(json.get("endLocation").is_some());
    assert!(json.get("start_location").is_none());
    // Unset optional fields stay off the wire entirely.
    assert!(json.get("elevationGain").is_none());
}
