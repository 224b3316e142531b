//! Category bucketing.

use std::collections::HashMap;

use crate::models::{CategoryGroup, Task};

/// Partitions the plan by category.
///
/// Buckets appear in the order their category is first seen while scanning
/// the plan; tasks inside a bucket keep plan order.
pub fn group_by_category(plan: &[Task]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for task in plan {
        let index = *positions.entry(task.category.as_str()).or_insert_with(|| {
            groups.push(CategoryGroup {
                category: task.category.clone(),
                tasks: Vec::new(),
            });
            groups.len() - 1
        });
        groups[index].tasks.push(task.clone());
    }

    groups
}
