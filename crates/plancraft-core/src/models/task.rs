//! Task model definition and related functionality.

use serde::{Deserialize, Serialize};

/// Category assigned to tasks that do not declare one.
pub const DEFAULT_CATEGORY: &str = "general";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A predefined unit of work that can be selected into a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: String,

    /// Short title of the task
    pub title: String,

    /// Longer explanation of what the task involves
    #[serde(default)]
    pub description: String,

    /// Free-text duration estimate, e.g. "2-4 days" or "1 week"
    #[serde(default)]
    pub duration: String,

    /// Difficulty label, e.g. "Easy" or "Advanced"
    #[serde(default)]
    pub difficulty: String,

    /// Category the task is grouped under
    #[serde(default = "default_category")]
    pub category: String,
}

impl Task {
    /// Creates a task in the default category.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            duration: duration.into(),
            difficulty: String::new(),
            category: default_category(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the difficulty label.
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    /// Sets the category. Blank categories fall back to
    /// [`DEFAULT_CATEGORY`].
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.trim().is_empty() {
            default_category()
        } else {
            category.trim().to_string()
        };
        self
    }

    /// Estimated duration of the task in whole days.
    pub fn duration_days(&self) -> u32 {
        crate::duration::parse_duration(&self.duration)
    }
}
