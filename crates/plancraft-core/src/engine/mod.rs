//! The assembled engine: catalog, selection, and plan generation.
//!
//! [`Engine`] is the explicitly constructed, session-scoped owner of the
//! selection. Front-ends build one with [`EngineBuilder`] and pass it by
//! reference to whatever needs it.
//!
//! ```rust
//! use plancraft_core::{EngineBuilder, planner::Generation};
//!
//! let mut engine = EngineBuilder::new().in_memory().build()?;
//! assert!(matches!(engine.generate(), Generation::Rejected { .. }));
//!
//! engine.select("wireframes")?;
//! engine.select("frontend")?;
//! let generation = engine.generate();
//! let plan = generation.rendered().expect("plan should render");
//! assert_eq!(plan.document.task_count, 2);
//! # Ok::<(), plancraft_core::PlannerError>(())
//! ```

pub mod builder;

pub use builder::EngineBuilder;

use crate::{
    catalog::Catalog,
    error::Result,
    planner::{Generation, PlanDocumentBuilder, PlanGenerator},
    selection::SelectionStore,
    store::KeyValueStore,
};

/// Catalog plus the selection made from it.
pub struct Engine<S> {
    catalog: Catalog,
    selection: SelectionStore<S>,
    plan_name: Option<String>,
}

impl<S: KeyValueStore> Engine<S> {
    /// Creates an engine from its parts.
    pub fn new(catalog: Catalog, selection: SelectionStore<S>) -> Self {
        Self {
            catalog,
            selection,
            plan_name: None,
        }
    }

    /// Sets the plan name used for generated documents.
    pub fn with_plan_name(mut self, name: impl Into<String>) -> Self {
        self.plan_name = Some(name.into());
        self
    }

    /// Selects a catalog task by id. Returns `true` if newly selected.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::TaskNotFound` if the catalog has no such task.
    pub fn select(&mut self, id: &str) -> Result<bool> {
        let task = self.catalog.require(id)?.clone();
        Ok(self.selection.select(task))
    }

    /// Deselects a task by id. Returns `true` if it was selected.
    ///
    /// Ids missing from the catalog can still be deselected, since a restored
    /// selection may outlive the catalog entry it came from.
    pub fn deselect(&mut self, id: &str) -> bool {
        self.selection.deselect(id)
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Generates a plan from the current selection with the configured name.
    pub fn generate(&self) -> Generation {
        self.generate_named(self.plan_name.as_deref())
    }

    /// Generates a plan, overriding the plan name when `name` is given.
    pub fn generate_named(&self, name: Option<&str>) -> Generation {
        let mut builder = PlanDocumentBuilder::new();
        if let Some(name) = name.or(self.plan_name.as_deref()) {
            builder = builder.with_name(name);
        }
        PlanGenerator::new(builder).generate(&self.selection)
    }
}

impl<S> Engine<S> {
    /// The task catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current selection.
    pub fn selection(&self) -> &SelectionStore<S> {
        &self.selection
    }
}
