//! Tests for the selection module.

use std::cell::Cell;

use super::*;
use crate::store::MemoryStore;

fn task(id: &str) -> Task {
    Task::new(id, format!("Task {id}"), "1 day")
}

fn ids<S>(store: &SelectionStore<S>) -> Vec<&str> {
    store.selected_ids().collect()
}

/// Backend whose writes always fail and that counts attempts.
#[derive(Default)]
struct FailingStore {
    writes: Cell<usize>,
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Err(PlannerError::persistence_read(key, "backend offline"))
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        Err(PlannerError::persistence_write(key, "backend offline"))
    }
}

/// In-memory backend recording every successful write by key.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    writes: Vec<String>,
}

impl CountingStore {
    fn take_writes(&mut self) -> Vec<String> {
        std::mem::take(&mut self.writes)
    }
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.inner.set(key, value)?;
        self.writes.push(key.to_string());
        Ok(())
    }
}

#[test]
fn test_select_appends_in_order() {
    let mut store = SelectionStore::open(MemoryStore::new());
    assert!(store.select(task("a")));
    assert!(store.select(task("b")));
    assert!(store.select(task("c")));

    assert_eq!(ids(&store), vec!["a", "b", "c"]);
    assert_eq!(store.count(), 3);
}

#[test]
fn test_repeated_select_is_noop() {
    let mut store = SelectionStore::open(MemoryStore::new());
    store.select(task("a"));
    store.select(task("b"));
    assert!(!store.select(task("a")));

    assert_eq!(ids(&store), vec!["a", "b"]);
    assert_eq!(store.count(), 2);
}

#[test]
fn test_deselect_removes_from_set_and_plan() {
    let mut store = SelectionStore::open(MemoryStore::new());
    store.select(task("a"));
    store.select(task("b"));

    assert!(store.deselect("a"));
    assert!(!store.is_selected("a"));
    assert_eq!(ids(&store), vec!["b"]);

    assert!(!store.deselect("missing"));
    assert_eq!(store.count(), 1);
}

#[test]
fn test_select_then_deselect_restores_prior_state() {
    let mut store = SelectionStore::open(MemoryStore::new());
    store.select(task("a"));
    store.select(task("b"));
    let before = store.state().clone();

    store.select(task("c"));
    store.deselect("c");

    assert_eq!(store.state(), &before);
}

#[test]
fn test_reselect_moves_to_end() {
    let mut store = SelectionStore::open(MemoryStore::new());
    store.select(task("a"));
    store.select(task("b"));
    store.deselect("a");
    store.select(task("a"));

    assert_eq!(ids(&store), vec!["b", "a"]);
}

#[test]
fn test_plan_matches_selected_ids_after_mixed_sequence() {
    let mut store = SelectionStore::open(MemoryStore::new());
    let sequence = [
        ("a", true),
        ("b", true),
        ("a", true),
        ("c", true),
        ("b", false),
        ("d", false),
        ("b", true),
        ("c", true),
        ("a", false),
    ];

    for (id, select) in sequence {
        if select {
            store.select(task(id));
        } else {
            store.deselect(id);
        }
    }

    let plan_ids = ids(&store);
    assert_eq!(plan_ids, vec!["c", "b"]);
    for id in &plan_ids {
        assert!(store.is_selected(id));
    }
    assert_eq!(store.count(), plan_ids.len());
}

#[test]
fn test_can_generate_tracks_count() {
    let mut store = SelectionStore::open(MemoryStore::new());
    assert!(!store.can_generate());

    store.select(task("a"));
    assert!(store.can_generate());

    store.clear();
    assert!(!store.can_generate());
    assert!(store.snapshot().is_empty());
}

#[test]
fn test_every_mutation_persists() {
    let mut store = SelectionStore::open(MemoryStore::new());
    assert!(store.backend().is_empty());

    store.select(task("a"));
    assert_eq!(
        store.backend().get(SELECTED_IDS_KEY).unwrap(),
        Some(r#"["a"]"#.to_string())
    );

    store.deselect("a");
    assert_eq!(
        store.backend().get(SELECTED_IDS_KEY).unwrap(),
        Some("[]".to_string())
    );
    assert_eq!(store.backend().get(PLAN_KEY).unwrap(), Some("[]".to_string()));
}

#[test]
fn test_each_mutation_persists_once_even_when_unchanged() {
    let one_persist = vec![PLAN_KEY.to_string(), SELECTED_IDS_KEY.to_string()];
    let mut store = SelectionStore::open(CountingStore::default());
    assert!(store.backend.take_writes().is_empty());

    store.clear();
    assert_eq!(store.backend.take_writes(), one_persist);

    assert!(store.select(task("a")));
    assert_eq!(store.backend.take_writes(), one_persist);

    assert!(!store.select(task("a")));
    assert_eq!(store.backend.take_writes(), one_persist);

    assert!(!store.deselect("missing"));
    assert_eq!(store.backend.take_writes(), one_persist);

    assert!(store.deselect("a"));
    assert_eq!(store.backend.take_writes(), one_persist);
    assert_eq!(store.count(), 0);
}

#[test]
fn test_round_trip_through_backend() {
    let mut store = SelectionStore::open(MemoryStore::new());
    store.select(
        Task::new("api", "Build API", "1 week")
            .with_description("REST endpoints")
            .with_difficulty("Hard")
            .with_category("backend"),
    );
    store.select(task("docs"));

    let reopened = SelectionStore::open(store.backend().clone());

    assert_eq!(reopened.snapshot(), store.snapshot());
    assert_eq!(reopened.restored_ids(), ["api", "docs"]);
    assert!(reopened.is_selected("api"));
}

#[test]
fn test_corrupt_persisted_data_starts_empty() {
    let mut backend = MemoryStore::new();
    backend.set(PLAN_KEY, "{not json").unwrap();
    backend.set(SELECTED_IDS_KEY, r#"["a"]"#).unwrap();

    let store = SelectionStore::open(backend);
    assert_eq!(store.count(), 0);
    assert!(store.restored_ids().is_empty());
}

#[test]
fn test_half_persisted_data_starts_empty() {
    let mut backend = MemoryStore::new();
    backend.set(SELECTED_IDS_KEY, r#"["a"]"#).unwrap();

    let store = SelectionStore::open(backend);
    assert_eq!(store.count(), 0);
}

#[test]
fn test_restore_replaces_state_and_keeps_invariants() {
    let mut store = SelectionStore::open(MemoryStore::new());
    store.select(task("old"));

    let plan = serde_json::to_string(&vec![task("a"), task("b"), task("a")]).unwrap();
    store
        .restore(r#"["a", "b", "ghost"]"#, &plan)
        .expect("Failed to restore");

    assert_eq!(ids(&store), vec!["a", "b"]);
    assert!(!store.is_selected("old"));
    assert!(!store.is_selected("ghost"));
    assert_eq!(store.restored_ids(), ["a", "b"]);
}

#[test]
fn test_restore_with_bad_data_leaves_state_untouched() {
    let mut store = SelectionStore::open(MemoryStore::new());
    store.select(task("keep"));

    let err = store.restore("[1, 2]", "[]").unwrap_err();
    assert!(matches!(err, PlannerError::PersistenceRead { .. }));
    assert_eq!(ids(&store), vec!["keep"]);
}

#[test]
fn test_write_failure_keeps_in_memory_mutation() {
    let mut store = SelectionStore::open(FailingStore::default());
    assert_eq!(store.count(), 0);

    assert!(store.select(task("a")));
    assert!(store.is_selected("a"));
    assert_eq!(store.backend().writes.get(), 1);

    let err = store.persist().unwrap_err();
    assert!(matches!(err, PlannerError::PersistenceWrite { .. }));
}
