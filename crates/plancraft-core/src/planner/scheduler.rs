//! Sequential single-resource scheduling.

use crate::models::{Schedule, Task, TimelineEntry};

/// Lays tasks out back to back in plan order.
///
/// The first task starts on day 1 and each following task starts the day
/// after its predecessor ends. Order is never changed: plan order is
/// schedule order. An empty plan yields an empty schedule of 0 days.
pub fn schedule(plan: &[Task]) -> Schedule {
    let mut timeline = Vec::with_capacity(plan.len());
    let mut last_end_day = 0u32;

    for task in plan {
        let duration_days = task.duration_days();
        let start_day = last_end_day.saturating_add(1);
        let end_day = start_day.saturating_add(duration_days - 1);

        timeline.push(TimelineEntry {
            task_title: task.title.clone(),
            start_day,
            end_day,
            duration_days,
        });
        last_end_day = end_day;
    }

    Schedule {
        timeline,
        total_days: last_end_day,
    }
}
