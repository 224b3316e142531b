//! Timeline entries produced by the scheduler.

use serde::{Deserialize, Serialize};

/// One task's slot in the sequential schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Title of the scheduled task
    pub task_title: String,

    /// First day the task occupies (1-based)
    pub start_day: u32,

    /// Last day the task occupies (inclusive, never before `start_day`)
    pub end_day: u32,

    /// Number of days the task occupies (at least 1)
    pub duration_days: u32,
}

impl TimelineEntry {
    /// Human-readable day range, e.g. "Day 3" or "Days 4-8".
    pub fn day_range(&self) -> String {
        if self.start_day == self.end_day {
            format!("Day {}", self.start_day)
        } else {
            format!("Days {}-{}", self.start_day, self.end_day)
        }
    }
}

/// Output of the scheduler: the ordered timeline and its total length.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schedule {
    /// Entries in plan order
    pub timeline: Vec<TimelineEntry>,

    /// End day of the last entry, 0 for an empty plan
    pub total_days: u32,
}
