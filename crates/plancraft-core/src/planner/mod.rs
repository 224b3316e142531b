//! Plan synthesis: scheduling, grouping, and document assembly.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ SelectionStore  │    │ scheduler +     │    │  PlanDocument   │
//! │   (snapshot)    │───▶│ grouper         │───▶│ ─▶ renderers    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`scheduler`]: back-to-back timeline in plan order
//! - [`grouper`]: category buckets in first-seen order
//! - [`builder`]: [`PlanDocumentBuilder`], the canonical document
//! - [`generate`]: the request state machine tying it all to the renderers
//!
//! # Example
//!
//! ```rust
//! use jiff::civil::date;
//! use plancraft_core::{planner::PlanDocumentBuilder, Task};
//!
//! let plan = vec![
//!     Task::new("a", "Wireframes", "3 days"),
//!     Task::new("b", "Copy review", "1 day"),
//! ];
//! let document = PlanDocumentBuilder::new()
//!     .with_date(date(2024, 3, 1))
//!     .build(&plan)?;
//!
//! assert_eq!(document.estimated_duration_days, 4);
//! assert_eq!(document.estimated_completion_date, date(2024, 3, 5));
//! # Ok::<(), plancraft_core::PlannerError>(())
//! ```

pub mod builder;
pub mod generate;
pub mod grouper;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use builder::{DEFAULT_PLAN_NAME, PlanDocumentBuilder};
pub use generate::{
    EMPTY_SELECTION_MESSAGE, Generation, GenerationState, PlanGenerator, RenderedPlan,
};
pub use grouper::group_by_category;
pub use scheduler::schedule;
