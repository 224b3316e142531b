//! Tests for the generation flow.

use jiff::civil::date;

use super::*;
use crate::{models::Task, selection::SelectionStore, store::MemoryStore};

fn generator() -> PlanGenerator {
    PlanGenerator::new(
        PlanDocumentBuilder::new()
            .with_name("Website")
            .with_date(date(2024, 1, 1)),
    )
}

fn sample_plan() -> Vec<Task> {
    vec![
        Task::new("a", "Wireframes", "3 days").with_category("design"),
        Task::new("b", "Checkout", "1 day").with_category("development"),
        Task::new("c", "Style guide", "4 days").with_category("design"),
    ]
}

#[test]
fn test_transitions() {
    use GenerationState::*;

    assert!(Idle.allows(Validating));
    assert!(Validating.allows(Rejected));
    assert!(Validating.allows(Building));
    assert!(Building.allows(Built));
    assert!(Built.allows(Rendered));

    assert!(!Idle.allows(Building));
    assert!(!Building.allows(Rejected));
    assert!(!Rendered.allows(Idle));
    assert!(!Rejected.allows(Validating));

    assert!(Rejected.is_terminal());
    assert!(Rendered.is_terminal());
    assert!(!Built.is_terminal());
}

#[test]
fn test_empty_selection_is_rejected_with_message() {
    let selection = SelectionStore::open(MemoryStore::new());
    let generation = generator().generate(&selection);

    assert_eq!(generation.state(), GenerationState::Rejected);
    assert!(generation.rendered().is_none());
    match generation {
        Generation::Rejected { message } => assert_eq!(message, EMPTY_SELECTION_MESSAGE),
        Generation::Rendered(_) => panic!("empty selection must not render"),
    }
}

#[test]
fn test_selection_is_rendered() {
    let mut selection = SelectionStore::open(MemoryStore::new());
    for task in sample_plan() {
        selection.select(task);
    }

    let generation = generator().generate(&selection);
    assert_eq!(generation.state(), GenerationState::Rendered);

    let rendered = generation.rendered().expect("plan should render");
    assert_eq!(rendered.document.task_count, 3);
    assert_eq!(rendered.file_name, "website-2024-01-01.html");
    assert_eq!(rendered.media_type, "text/html");
    assert_eq!(rendered.message_subject, "Project plan: Website (3 tasks, 8 days)");
}

#[test]
fn test_renderings_agree_on_stats() {
    let generation = generator().generate_from(&sample_plan());
    let rendered = generation.rendered().expect("plan should render");
    let document = &rendered.document;

    assert_eq!(rendered.view.summary.task_count, document.task_count);
    assert_eq!(
        rendered.view.summary.estimated_duration_days,
        document.estimated_duration_days
    );

    assert!(
        rendered
            .message_body
            .contains(&format!("Total tasks: {}", document.task_count))
    );
    assert!(rendered.message_body.contains(&format!(
        "Estimated duration: {} days",
        document.estimated_duration_days
    )));

    assert!(rendered.standalone.contains(&format!(
        "<span class=\"value\">{}</span>Tasks",
        document.task_count
    )));
    assert!(rendered.standalone.contains(&format!(
        "<span class=\"value\">{} days</span>Estimated duration",
        document.estimated_duration_days
    )));
}

#[test]
fn test_generation_reads_snapshot_order() {
    let mut selection = SelectionStore::open(MemoryStore::new());
    for task in sample_plan().into_iter().rev() {
        selection.select(task);
    }

    let generation = generator().generate(&selection);
    let rendered = generation.rendered().expect("plan should render");
    let titles: Vec<_> = rendered
        .document
        .timeline
        .iter()
        .map(|entry| entry.task_title.as_str())
        .collect();

    assert_eq!(titles, vec!["Style guide", "Checkout", "Wireframes"]);
}
