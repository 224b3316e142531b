//! The canonical plan document all renderers consume.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Task, TimelineEntry};

/// Tasks sharing one category, in plan order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryGroup {
    /// Category name
    pub category: String,

    /// Tasks in this category, in plan order
    pub tasks: Vec<Task>,
}

/// A fully built project plan.
///
/// Documents are built in one step by
/// [`PlanDocumentBuilder`](crate::planner::PlanDocumentBuilder) and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanDocument {
    /// Name of the plan, used for headings and export file names
    pub name: String,

    /// Day the plan was generated
    pub created_date: Date,

    /// Sum of all timeline entry durations
    pub estimated_duration_days: u32,

    /// `created_date` advanced by `estimated_duration_days` calendar days
    pub estimated_completion_date: Date,

    /// Number of tasks in the plan
    pub task_count: usize,

    /// Number of distinct categories
    pub category_count: usize,

    /// Tasks bucketed by category in first-seen order
    pub tasks_by_category: Vec<CategoryGroup>,

    /// Sequential schedule in plan order
    pub timeline: Vec<TimelineEntry>,
}
