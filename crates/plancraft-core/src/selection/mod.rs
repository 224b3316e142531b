//! Selection tracking for the plan under construction.
//!
//! A [`SelectionStore`] owns the set of selected task ids and the ordered
//! list of full task records (the plan). Tasks are appended in the order they
//! are selected; selecting an id that is already present changes nothing.
//!
//! Every mutation is written through to a [`KeyValueStore`] as a best-effort
//! cache. A failed write is logged and the in-memory change stands, since the
//! in-memory state is the source of truth for the current session.
//!
//! ```rust
//! use plancraft_core::{MemoryStore, SelectionStore, Task};
//!
//! let mut selection = SelectionStore::open(MemoryStore::new());
//! selection.select(Task::new("design", "Design mockups", "2-4 days"));
//! selection.select(Task::new("design", "Design mockups", "2-4 days"));
//! assert_eq!(selection.count(), 1);
//!
//! selection.deselect("design");
//! assert!(!selection.can_generate());
//! ```

use std::collections::HashSet;

use log::{debug, info, warn};

use crate::{
    error::{PlannerError, Result},
    models::Task,
    store::KeyValueStore,
};

#[cfg(test)]
mod tests;

/// Key holding the serialized ordered plan.
pub const PLAN_KEY: &str = "plancraft.plan";

/// Key holding the serialized selected-id set.
pub const SELECTED_IDS_KEY: &str = "plancraft.selected_ids";

/// Selected ids plus the ordered, deduplicated plan they describe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_ids: HashSet<String>,
    plan: Vec<Task>,
}

impl SelectionState {
    /// Builds a state from persisted parts, keeping the invariants intact.
    ///
    /// The plan is authoritative: duplicate entries keep their first
    /// occurrence, and ids without a plan entry are dropped.
    fn from_parts(ids: Vec<String>, plan: Vec<Task>) -> Self {
        let mut state = Self::default();
        for task in plan {
            if state.selected_ids.insert(task.id.clone()) {
                state.plan.push(task);
            } else {
                debug!("Dropping duplicate plan entry '{}'", task.id);
            }
        }

        for id in ids.iter().filter(|id| !state.selected_ids.contains(*id)) {
            warn!("Selected id '{id}' has no plan entry, discarding it");
        }

        state
    }

    /// Ordered plan.
    pub fn plan(&self) -> &[Task] {
        &self.plan
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.selected_ids.contains(id)
    }

    /// Number of selected tasks.
    pub fn len(&self) -> usize {
        self.plan.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.plan.is_empty()
    }
}

/// Session-scoped owner of the selection and its persistence backend.
pub struct SelectionStore<S> {
    state: SelectionState,
    backend: S,
    restored_ids: Vec<String>,
}

impl<S: KeyValueStore> SelectionStore<S> {
    /// Opens a store, hydrating from `backend` or starting empty.
    ///
    /// Missing or malformed persisted data is logged and replaced with an
    /// empty selection; opening never fails.
    pub fn open(backend: S) -> Self {
        let mut store = Self {
            state: SelectionState::default(),
            backend,
            restored_ids: Vec::new(),
        };

        match store.load() {
            Ok(Some(state)) => {
                info!("Restored {} selected task(s)", state.len());
                store.replace_state(state);
            }
            Ok(None) => info!("No saved selection found, starting empty"),
            Err(e) => warn!("Ignoring saved selection: {e}"),
        }

        store
    }

    /// Selects a task. Returns `true` if it was newly added to the plan.
    ///
    /// Selecting an already-selected id leaves the plan untouched but still
    /// persists.
    pub fn select(&mut self, task: Task) -> bool {
        let added = self.state.selected_ids.insert(task.id.clone());
        if added {
            debug!("Selected task '{}'", task.id);
            self.state.plan.push(task);
        }
        self.persist_best_effort();
        added
    }

    /// Deselects a task by id. Returns `true` if it was selected.
    pub fn deselect(&mut self, task_id: &str) -> bool {
        let removed = self.state.selected_ids.remove(task_id);
        if removed {
            debug!("Deselected task '{task_id}'");
            self.state.plan.retain(|task| task.id != task_id);
        }
        self.persist_best_effort();
        removed
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.state = SelectionState::default();
        self.persist_best_effort();
    }

    /// Replaces the selection wholesale from serialized persisted values.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PersistenceRead` if either value is not valid
    /// JSON of the expected shape. The current selection is left untouched
    /// in that case.
    pub fn restore(&mut self, serialized_ids: &str, serialized_plan: &str) -> Result<()> {
        let state = parse_state(serialized_ids, serialized_plan)?;
        self.replace_state(state);
        self.persist_best_effort();
        Ok(())
    }

    /// Writes the current selection to the backend.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PersistenceWrite` if serialization or either
    /// backend write fails.
    pub fn persist(&mut self) -> Result<()> {
        let ids: Vec<&str> = self.state.plan.iter().map(|task| task.id.as_str()).collect();
        let ids_json = serde_json::to_string(&ids)
            .map_err(|e| PlannerError::persistence_write(SELECTED_IDS_KEY, e))?;
        let plan_json = serde_json::to_string(&self.state.plan)
            .map_err(|e| PlannerError::persistence_write(PLAN_KEY, e))?;

        self.backend
            .set(PLAN_KEY, &plan_json)
            .map_err(|e| PlannerError::persistence_write(PLAN_KEY, e))?;
        self.backend
            .set(SELECTED_IDS_KEY, &ids_json)
            .map_err(|e| PlannerError::persistence_write(SELECTED_IDS_KEY, e))
    }

    fn persist_best_effort(&mut self) {
        if let Err(e) = self.persist() {
            warn!("Selection not saved: {e}");
        }
    }

    fn load(&self) -> Result<Option<SelectionState>> {
        let ids = self
            .backend
            .get(SELECTED_IDS_KEY)
            .map_err(|e| PlannerError::persistence_read(SELECTED_IDS_KEY, e))?;
        let plan = self
            .backend
            .get(PLAN_KEY)
            .map_err(|e| PlannerError::persistence_read(PLAN_KEY, e))?;

        match (ids, plan) {
            (None, None) => Ok(None),
            (Some(ids), Some(plan)) => parse_state(&ids, &plan).map(Some),
            (None, Some(_)) => Err(PlannerError::persistence_read(
                SELECTED_IDS_KEY,
                "value is absent",
            )),
            (Some(_), None) => Err(PlannerError::persistence_read(PLAN_KEY, "value is absent")),
        }
    }

    fn replace_state(&mut self, state: SelectionState) {
        self.restored_ids = state.plan.iter().map(|task| task.id.clone()).collect();
        self.state = state;
    }
}

impl<S> SelectionStore<S> {
    /// Number of selected tasks.
    pub fn count(&self) -> usize {
        self.state.len()
    }

    /// Whether a plan can be generated from the current selection.
    pub fn can_generate(&self) -> bool {
        self.count() > 0
    }

    /// Read-only view of the plan in selection order.
    pub fn snapshot(&self) -> &[Task] {
        self.state.plan()
    }

    /// Whether the task with `id` is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.state.contains(id)
    }

    /// Selected ids in plan order.
    pub fn selected_ids(&self) -> impl Iterator<Item = &str> {
        self.state.plan.iter().map(|task| task.id.as_str())
    }

    /// Ids restored from persistence by the last hydration or restore, in
    /// plan order, so the presentation layer can re-mark them.
    pub fn restored_ids(&self) -> &[String] {
        &self.restored_ids
    }

    /// Current selection state.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// The persistence backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }
}

fn parse_state(serialized_ids: &str, serialized_plan: &str) -> Result<SelectionState> {
    let ids: Vec<String> = serde_json::from_str(serialized_ids)
        .map_err(|e| PlannerError::persistence_read(SELECTED_IDS_KEY, e))?;
    let plan: Vec<Task> = serde_json::from_str(serialized_plan)
        .map_err(|e| PlannerError::persistence_read(PLAN_KEY, e))?;
    Ok(SelectionState::from_parts(ids, plan))
}
