//! Builder for assembling plan documents from a selection.

use jiff::{Span, Zoned, civil::Date};
use log::debug;

use super::{group_by_category, schedule};
use crate::{
    error::{PlannerError, Result},
    models::{PlanDocument, Task},
};

/// Plan name used when none is configured.
pub const DEFAULT_PLAN_NAME: &str = "project-plan";

/// Builds [`PlanDocument`]s from an ordered plan.
#[derive(Debug, Clone)]
pub struct PlanDocumentBuilder {
    name: String,
    date: Option<Date>,
}

impl PlanDocumentBuilder {
    /// Creates a builder that stamps documents with today's date.
    pub fn new() -> Self {
        Self {
            name: DEFAULT_PLAN_NAME.to_string(),
            date: None,
        }
    }

    /// Sets the plan name used in headings and export file names.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.name = name.trim().to_string();
        }
        self
    }

    /// Fixes the creation date instead of reading the system clock.
    pub fn with_date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    /// Builds the document for `plan`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::EmptyPlan` if `plan` is empty. Callers should
    /// check the selection first and show a validation message instead.
    pub fn build(&self, plan: &[Task]) -> Result<PlanDocument> {
        if plan.is_empty() {
            return Err(PlannerError::EmptyPlan);
        }

        let schedule = schedule(plan);
        let tasks_by_category = group_by_category(plan);
        let estimated_duration_days = schedule
            .timeline
            .iter()
            .fold(0u32, |total, entry| total.saturating_add(entry.duration_days));

        let created_date = self.date.unwrap_or_else(|| Zoned::now().date());
        let estimated_completion_date = advance_days(created_date, estimated_duration_days);

        debug!(
            "Built plan '{}' with {} task(s) over {} day(s)",
            self.name,
            plan.len(),
            estimated_duration_days
        );

        Ok(PlanDocument {
            name: self.name.clone(),
            created_date,
            estimated_duration_days,
            estimated_completion_date,
            task_count: plan.len(),
            category_count: tasks_by_category.len(),
            tasks_by_category,
            timeline: schedule.timeline,
        })
    }
}

impl Default for PlanDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Advances by calendar days, saturating at the last representable date.
fn advance_days(date: Date, days: u32) -> Date {
    match Span::new().try_days(i64::from(days)) {
        Ok(span) => date.saturating_add(span),
        Err(_) => Date::MAX,
    }
}
