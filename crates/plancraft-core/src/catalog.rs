//! The catalog of predefined tasks users pick from.
//!
//! Catalog files are loosely shaped JSON written by hand, so every field of a
//! record is optional on the way in. [`Catalog::from_json`] validates each
//! record into a strict [`Task`] and rejects the file as a whole if any
//! record is unusable; nothing downstream ever sees a half-valid task.

use std::{collections::HashSet, fs, path::Path};

use log::debug;
use serde::Deserialize;

use crate::{
    error::{PlannerError, Result},
    models::{DEFAULT_CATEGORY, Task},
};

const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

/// A task record as written in a catalog file.
#[derive(Debug, Default, Deserialize)]
pub struct TaskRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = PlannerError;

    fn try_from(record: TaskRecord) -> Result<Self> {
        let id = required(record.id, "id")?;
        let title = required(record.title, "title")?;
        let category = record
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Ok(Task {
            id,
            title,
            description: record.description.unwrap_or_default(),
            duration: record.duration.unwrap_or_default(),
            difficulty: record.difficulty.unwrap_or_default(),
            category,
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(PlannerError::invalid_task(field, "must be present and not blank")),
    }
}

/// Ordered collection of predefined tasks with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tasks: Vec<Task>,
}

impl Catalog {
    /// The catalog shipped with the crate.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded catalog is malformed.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Reads and validates a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Io` if the file cannot be read, and the
    /// errors of [`Catalog::from_json`] otherwise.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| PlannerError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Parses a JSON array of task records.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::CatalogFormat` for malformed JSON and
    /// `PlannerError::InvalidTask` for a record without `id`/`title` or a
    /// duplicate id.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<TaskRecord> = serde_json::from_str(json)?;
        let tasks = records
            .into_iter()
            .map(Task::try_from)
            .collect::<Result<Vec<_>>>()?;
        Self::from_tasks(tasks)
    }

    /// Builds a catalog from already-typed tasks.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidTask` if two tasks share an id.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self> {
        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(task.id.as_str()) {
                return Err(PlannerError::invalid_task(
                    "id",
                    format!("duplicate task id '{}'", task.id),
                ));
            }
        }
        debug!("Loaded catalog with {} task(s)", tasks.len());
        Ok(Self { tasks })
    }

    /// Looks up a task by id.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Looks up a task by id, failing if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::TaskNotFound` for an unknown id.
    pub fn require(&self, id: &str) -> Result<&Task> {
        self.get(id).ok_or_else(|| PlannerError::TaskNotFound { id: id.to_string() })
    }

    /// All tasks in catalog order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the catalog has no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
