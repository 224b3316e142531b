//! Configuration for [`Engine`] instances.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use super::Engine;
use crate::{
    catalog::Catalog,
    error::{PlannerError, Result},
    selection::SelectionStore,
    store::SqliteStore,
};

const DATA_PREFIX: &str = "plancraft";
const DATABASE_FILE: &str = "plancraft.db";

/// Where the selection lives.
#[derive(Debug, Clone, Default)]
enum SelectionDatabase {
    /// `$XDG_DATA_HOME/plancraft/plancraft.db`
    #[default]
    DataHome,
    File(PathBuf),
    Memory,
}

/// Collects the catalog source, selection database and plan name, then opens
/// an [`Engine`] backed by SQLite.
///
/// Optional setters accept `Option` so command-line flags can be passed
/// straight through; `None` keeps the default.
///
/// ```rust
/// use plancraft_core::EngineBuilder;
///
/// let engine = EngineBuilder::new()
///     .in_memory()
///     .with_plan_name(Some("Launch"))
///     .build()?;
/// assert_eq!(engine.selection().count(), 0);
/// # Ok::<(), plancraft_core::PlannerError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    database: SelectionDatabase,
    catalog_path: Option<PathBuf>,
    plan_name: Option<String>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the selection in this SQLite file; parent directories are
    /// created on build.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database = SelectionDatabase::File(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads tasks from a JSON file instead of the built-in catalog.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Names generated plans unless a name is given per generation.
    pub fn with_plan_name(mut self, name: Option<impl Into<String>>) -> Self {
        if let Some(name) = name {
            self.plan_name = Some(name.into());
        }
        self
    }

    /// Keeps the selection in a private in-memory database.
    pub fn in_memory(mut self) -> Self {
        self.database = SelectionDatabase::Memory;
        self
    }

    /// Loads the catalog, opens the database and hydrates the saved
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Io` if the catalog cannot be read or the
    /// database directory cannot be created, `PlannerError::DataDirectory`
    /// if no default location exists, `PlannerError::Storage` if SQLite
    /// fails, and the catalog validation errors.
    pub fn build(self) -> Result<Engine<SqliteStore>> {
        let catalog = match &self.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::builtin()?,
        };

        let backend = match self.database {
            SelectionDatabase::Memory => SqliteStore::open_in_memory()?,
            SelectionDatabase::File(path) => open_file(&path)?,
            SelectionDatabase::DataHome => open_file(&data_home_database()?)?,
        };

        let mut engine = Engine::new(catalog, SelectionStore::open(backend));
        if let Some(name) = self.plan_name {
            engine = engine.with_plan_name(name);
        }
        Ok(engine)
    }
}

fn open_file(path: &Path) -> Result<SqliteStore> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PlannerError::io(parent, e))?;
    }
    info!("Using selection database at {}", path.display());
    SqliteStore::open(path)
}

fn data_home_database() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix(DATA_PREFIX)
        .place_data_file(DATABASE_FILE)
        .map_err(|e| PlannerError::DataDirectory(e.to_string()))
}
