//! Plain-text message body for share actions.

use std::fmt;

use super::{LongDate, days_label};
use crate::models::PlanDocument;

/// Flattened plain-text rendering of a plan, suitable as an email body.
///
/// Layout: header, stats block, timeline list, per-category task list.
pub struct MessageBody<'a>(pub &'a PlanDocument);

impl MessageBody<'_> {
    /// One-line subject for the share action.
    pub fn subject(&self) -> String {
        let document = self.0;
        format!(
            "Project plan: {} ({} task{}, {})",
            document.name,
            document.task_count,
            if document.task_count == 1 { "" } else { "s" },
            days_label(document.estimated_duration_days)
        )
    }
}

impl fmt::Display for MessageBody<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let document = self.0;

        writeln!(f, "PROJECT PLAN: {}", document.name)?;
        writeln!(f, "Created: {}", LongDate(&document.created_date))?;
        writeln!(f)?;

        writeln!(f, "SUMMARY")?;
        writeln!(f, "Total tasks: {}", document.task_count)?;
        writeln!(f, "Categories: {}", document.category_count)?;
        writeln!(
            f,
            "Estimated duration: {}",
            days_label(document.estimated_duration_days)
        )?;
        writeln!(
            f,
            "Estimated completion: {}",
            LongDate(&document.estimated_completion_date)
        )?;
        writeln!(f)?;

        writeln!(f, "TIMELINE")?;
        for entry in &document.timeline {
            writeln!(
                f,
                "{}: {} ({})",
                entry.day_range(),
                entry.task_title,
                days_label(entry.duration_days)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "TASKS BY CATEGORY")?;
        for group in &document.tasks_by_category {
            writeln!(f)?;
            writeln!(f, "{}", group.category.to_uppercase())?;
            for task in &group.tasks {
                let details: Vec<&str> = [task.duration.as_str(), task.difficulty.as_str()]
                    .into_iter()
                    .filter(|detail| !detail.is_empty())
                    .collect();
                if details.is_empty() {
                    writeln!(f, "  - {}", task.title)?;
                } else {
                    writeln!(f, "  - {} ({})", task.title, details.join(", "))?;
                }
                if !task.description.is_empty() {
                    writeln!(f, "    {}", task.description)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{models::Task, planner::PlanDocumentBuilder};

    fn sample_document() -> PlanDocument {
        let plan = vec![
            Task::new("seo", "SEO audit", "2-4 days")
                .with_category("marketing")
                .with_difficulty("Medium")
                .with_description("Crawl and fix meta tags"),
            Task::new("copy", "Landing copy", "1 day").with_category("content"),
        ];
        PlanDocumentBuilder::new()
            .with_name("Spring campaign")
            .with_date(date(2024, 3, 4))
            .build(&plan)
            .expect("Failed to build document")
    }

    #[test]
    fn test_message_layout() {
        let document = sample_document();
        let body = MessageBody(&document).to_string();

        let expected = "\
PROJECT PLAN: Spring campaign
Created: March 4, 2024

SUMMARY
Total tasks: 2
Categories: 2
Estimated duration: 4 days
Estimated completion: March 8, 2024

TIMELINE
Days 1-3: SEO audit (3 days)
Day 4: Landing copy (1 day)

TASKS BY CATEGORY

MARKETING
  - SEO audit (2-4 days, Medium)
    Crawl and fix meta tags

CONTENT
  - Landing copy (1 day)
";
        assert_eq!(body, expected);
    }

    #[test]
    fn test_subject() {
        let document = sample_document();
        assert_eq!(
            MessageBody(&document).subject(),
            "Project plan: Spring campaign (2 tasks, 4 days)"
        );
    }
}
