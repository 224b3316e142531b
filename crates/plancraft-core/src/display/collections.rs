//! Task listings for catalog and selection screens.

use std::fmt;

use crate::models::Task;

/// Markdown list of tasks with a selection checkbox per entry.
///
/// # Examples
///
/// ```rust
/// use plancraft_core::{display::TaskListing, Task};
///
/// let tasks = vec![Task::new("logo", "Logo design", "3 days")];
/// let listing = TaskListing::new(&tasks, |task| task.id == "logo");
/// assert!(listing.to_string().contains("- [x] **Logo design** (`logo`)"));
/// ```
pub struct TaskListing<'a> {
    entries: Vec<(&'a Task, bool)>,
}

impl<'a> TaskListing<'a> {
    /// Lists `tasks`, marking those for which `is_selected` returns true.
    pub fn new(tasks: &'a [Task], is_selected: impl Fn(&Task) -> bool) -> Self {
        Self {
            entries: tasks.iter().map(|task| (task, is_selected(task))).collect(),
        }
    }

    /// Lists `tasks` with every entry marked as selected.
    pub fn selected(tasks: &'a [Task]) -> Self {
        Self::new(tasks, |_| true)
    }

    /// Check if the listing is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for TaskListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "No tasks.");
        }

        for (task, selected) in &self.entries {
            let mark = if *selected { "x" } else { " " };
            write!(f, "- [{mark}] **{}** (`{}`)", task.title, task.id)?;
            for detail in [&task.duration, &task.difficulty, &task.category] {
                if !detail.is_empty() {
                    write!(f, " · {detail}")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_listing() {
        let listing = TaskListing::selected(&[]);
        assert!(listing.is_empty());
        assert_eq!(listing.to_string(), "No tasks.\n");
    }

    #[test]
    fn test_marks_selected_entries() {
        let tasks = vec![
            Task::new("a", "Alpha", "1 day").with_difficulty("Easy"),
            Task::new("b", "Beta", "").with_category("ops"),
        ];
        let output = TaskListing::new(&tasks, |task| task.id == "b").to_string();

        assert_eq!(
            output,
            "- [ ] **Alpha** (`a`) · 1 day · Easy · general\n- [x] **Beta** (`b`) · ops\n"
        );
    }
}
