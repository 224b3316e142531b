//! Core library for the Plancraft selection-to-plan engine.
//!
//! Users pick tasks from a catalog of predefined work items; this crate turns
//! the selection into a project plan: an ordered, deduplicated task list, a
//! day-by-day schedule derived from free-text duration estimates, tasks
//! grouped by category, and three renderings of the result.
//!
//! # Architecture
//!
//! ```text
//! select/deselect ─▶ SelectionStore ─▶ PlanDocumentBuilder ─▶ PlanDocument
//!                         │                 │  schedule()          │
//!                   KeyValueStore           │  group_by_category() ▼
//!                 (SQLite / memory)         ▼                 renderers
//!                                      parse_duration()   view / message / html
//! ```
//!
//! - [`duration`]: free-text estimate parsing
//! - [`selection`]: the selection state and its persistence
//! - [`planner`]: scheduling, grouping, document assembly, generation flow
//! - [`display`]: the renderers
//! - [`catalog`]: validated predefined tasks
//! - [`store`]: key-value persistence backends
//! - [`engine`]: everything wired together behind a builder
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use plancraft_core::{
//!     MemoryStore, SelectionStore, Task,
//!     display::MessageBody,
//!     planner::PlanDocumentBuilder,
//! };
//!
//! let mut selection = SelectionStore::open(MemoryStore::new());
//! selection.select(Task::new("a", "Wireframes", "3 days").with_category("design"));
//! selection.select(Task::new("b", "Checkout", "1 week").with_category("development"));
//!
//! let document = PlanDocumentBuilder::new()
//!     .with_name("Shop relaunch")
//!     .with_date(date(2024, 6, 1))
//!     .build(selection.snapshot())?;
//!
//! assert_eq!(document.estimated_duration_days, 10);
//! assert!(MessageBody(&document).to_string().contains("Days 4-10: Checkout"));
//! # Ok::<(), plancraft_core::PlannerError>(())
//! ```

pub mod catalog;
pub mod display;
pub mod duration;
pub mod engine;
pub mod error;
pub mod models;
pub mod planner;
pub mod selection;
pub mod store;

// Re-export commonly used types
pub use catalog::Catalog;
pub use display::{MessageBody, PlanView, StandaloneDocument, TaskListing};
pub use duration::{DEFAULT_DURATION_DAYS, DurationEstimate, estimate_duration, parse_duration};
pub use engine::{Engine, EngineBuilder};
pub use error::{PlannerError, Result};
pub use models::{CategoryGroup, PlanDocument, Schedule, Task, TimelineEntry};
pub use planner::{Generation, PlanDocumentBuilder, PlanGenerator, RenderedPlan};
pub use selection::{SelectionState, SelectionStore};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
