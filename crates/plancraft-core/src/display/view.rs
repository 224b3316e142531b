//! Structured view model for interactive display.
//!
//! [`PlanView`] carries exactly what a screen needs, already formatted where
//! formatting is presentation-neutral (ISO dates, day-range labels), while
//! numbers stay numbers. It serializes to JSON for front-ends and implements
//! `Display` as markdown for the terminal.

use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{LongDate, days_label};
use crate::models::{CategoryGroup, PlanDocument, Task, TimelineEntry};

/// On-screen representation of a generated plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanView {
    /// Plan name
    pub title: String,
    /// Headline numbers
    pub summary: SummaryView,
    /// One section per category, in first-seen order
    pub sections: Vec<CategorySection>,
    /// One row per scheduled task, in plan order
    pub timeline: Vec<TimelineRow>,
}

/// Summary statistics block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SummaryView {
    /// Creation date, ISO 8601 (`YYYY-MM-DD`)
    pub created_date: String,
    /// Creation date for people, e.g. "June 1, 2024"
    pub created_label: String,
    /// Estimated completion date, ISO 8601
    pub estimated_completion_date: String,
    /// Estimated completion date for people
    pub completion_label: String,
    /// Total scheduled days
    pub estimated_duration_days: u32,
    /// Number of tasks
    pub task_count: usize,
    /// Number of categories
    pub category_count: usize,
}

/// Tasks of one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CategorySection {
    pub category: String,
    pub tasks: Vec<TaskCard>,
}

/// One task as shown inside a category section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TaskCard {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub difficulty: String,
    pub description: String,
}

/// One timeline row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TimelineRow {
    pub task_title: String,
    pub start_day: u32,
    pub end_day: u32,
    pub duration_days: u32,
    /// "Day N" or "Days N-M"
    pub day_range: String,
}

impl From<&Task> for TaskCard {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            duration: task.duration.clone(),
            difficulty: task.difficulty.clone(),
            description: task.description.clone(),
        }
    }
}

impl From<&CategoryGroup> for CategorySection {
    fn from(group: &CategoryGroup) -> Self {
        Self {
            category: group.category.clone(),
            tasks: group.tasks.iter().map(Into::into).collect(),
        }
    }
}

impl From<&TimelineEntry> for TimelineRow {
    fn from(entry: &TimelineEntry) -> Self {
        Self {
            task_title: entry.task_title.clone(),
            start_day: entry.start_day,
            end_day: entry.end_day,
            duration_days: entry.duration_days,
            day_range: entry.day_range(),
        }
    }
}

impl From<&PlanDocument> for PlanView {
    fn from(document: &PlanDocument) -> Self {
        Self {
            title: document.name.clone(),
            summary: SummaryView {
                created_date: document.created_date.to_string(),
                created_label: LongDate(&document.created_date).to_string(),
                estimated_completion_date: document.estimated_completion_date.to_string(),
                completion_label: LongDate(&document.estimated_completion_date).to_string(),
                estimated_duration_days: document.estimated_duration_days,
                task_count: document.task_count,
                category_count: document.category_count,
            },
            sections: document.tasks_by_category.iter().map(Into::into).collect(),
            timeline: document.timeline.iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for PlanView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        let summary = &self.summary;
        writeln!(f, "- **Created**: {}", summary.created_label)?;
        writeln!(
            f,
            "- **Tasks**: {} across {} categor{}",
            summary.task_count,
            summary.category_count,
            if summary.category_count == 1 { "y" } else { "ies" }
        )?;
        writeln!(
            f,
            "- **Estimated duration**: {}",
            days_label(summary.estimated_duration_days)
        )?;
        writeln!(
            f,
            "- **Estimated completion**: {}",
            summary.completion_label
        )?;

        writeln!(f, "\n## Timeline")?;
        writeln!(f)?;
        for row in &self.timeline {
            writeln!(
                f,
                "- **{}**: {} ({})",
                row.day_range,
                row.task_title,
                days_label(row.duration_days)
            )?;
        }

        writeln!(f, "\n## Tasks by Category")?;
        for section in &self.sections {
            writeln!(f, "\n### {}", section.category)?;
            writeln!(f)?;
            for card in &section.tasks {
                write!(f, "- **{}**", card.title)?;
                if !card.duration.is_empty() {
                    write!(f, " · {}", card.duration)?;
                }
                if !card.difficulty.is_empty() {
                    write!(f, " · {}", card.difficulty)?;
                }
                writeln!(f)?;
                if !card.description.is_empty() {
                    writeln!(f, "  {}", card.description)?;
                }
            }
        }

        Ok(())
    }
}
