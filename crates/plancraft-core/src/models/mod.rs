//! Data models for tasks, schedules, and plan documents.
//!
//! Display implementations for these models live in [`crate::display`] so
//! the data structures stay free of presentation logic.

pub mod document;
pub mod task;
pub mod timeline;


pub use document::{CategoryGroup, PlanDocument};
pub use task::{DEFAULT_CATEGORY, Task};
pub use timeline::{Schedule, TimelineEntry};
