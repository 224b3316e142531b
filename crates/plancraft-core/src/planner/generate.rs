//! The per-request generation state machine.
//!
//! ```text
//! Idle ─▶ Validating ─┬─▶ Rejected                      (empty selection)
//!                     └─▶ Building ─▶ Built ─▶ Rendered
//! ```
//!
//! Only the two terminal outcomes are ever handed to callers, so a partially
//! built document can never escape.

use log::debug;

use super::PlanDocumentBuilder;
use crate::{
    display::{MessageBody, PlanView, StandaloneDocument},
    models::{PlanDocument, Task},
    selection::SelectionStore,
};

/// Message shown when generation is requested with nothing selected.
pub const EMPTY_SELECTION_MESSAGE: &str = "Please select at least one task to generate a plan.";

/// Stage of a single generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    Validating,
    Rejected,
    Building,
    Built,
    Rendered,
}

impl GenerationState {
    /// Whether moving from `self` to `next` is a legal transition.
    pub fn allows(self, next: GenerationState) -> bool {
        use GenerationState::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Rejected)
                | (Validating, Building)
                | (Building, Built)
                | (Built, Rendered)
        )
    }

    /// Whether no further transitions are possible.
    pub fn is_terminal(self) -> bool {
        matches!(self, GenerationState::Rejected | GenerationState::Rendered)
    }

    fn advance(&mut self, next: GenerationState) {
        debug_assert!(self.allows(next), "illegal transition {self:?} -> {next:?}");
        debug!("Plan generation: {self:?} -> {next:?}");
        *self = next;
    }
}

/// A document together with all three of its renderings.
#[derive(Debug, Clone)]
pub struct RenderedPlan {
    /// The canonical document
    pub document: PlanDocument,
    /// Structured view model for on-screen display
    pub view: PlanView,
    /// Subject line for a share action
    pub message_subject: String,
    /// Plain-text message body for a share action
    pub message_body: String,
    /// Self-contained HTML document for export
    pub standalone: String,
    /// Suggested file name for the exported document
    pub file_name: String,
    /// Media type of the exported document
    pub media_type: &'static str,
}

impl RenderedPlan {
    /// Renders every output format from `document`.
    pub fn render(document: PlanDocument) -> Self {
        let message = MessageBody(&document);
        let export = StandaloneDocument(&document);

        let view = PlanView::from(&document);
        let message_subject = message.subject();
        let message_body = message.to_string();
        let standalone = export.to_string();
        let file_name = export.file_name();
        let media_type = export.media_type();

        Self {
            document,
            view,
            message_subject,
            message_body,
            standalone,
            file_name,
            media_type,
        }
    }
}

/// Terminal outcome of a generation request.
#[derive(Debug, Clone)]
pub enum Generation {
    /// Nothing to plan; carries the user-facing validation message
    Rejected { message: String },
    /// The plan was built and rendered
    Rendered(Box<RenderedPlan>),
}

impl Generation {
    /// Terminal state this outcome corresponds to.
    pub fn state(&self) -> GenerationState {
        match self {
            Generation::Rejected { .. } => GenerationState::Rejected,
            Generation::Rendered(_) => GenerationState::Rendered,
        }
    }

    /// The rendered plan, if generation succeeded.
    pub fn rendered(&self) -> Option<&RenderedPlan> {
        match self {
            Generation::Rendered(plan) => Some(plan.as_ref()),
            Generation::Rejected { .. } => None,
        }
    }
}

/// Runs generation requests against a configured document builder.
#[derive(Debug, Clone, Default)]
pub struct PlanGenerator {
    builder: PlanDocumentBuilder,
}

impl PlanGenerator {
    /// Creates a generator using `builder` for document assembly.
    pub fn new(builder: PlanDocumentBuilder) -> Self {
        Self { builder }
    }

    /// Generates a plan from a consistent snapshot of the selection.
    pub fn generate<S>(&self, selection: &SelectionStore<S>) -> Generation {
        self.generate_from(selection.snapshot())
    }

    /// Generates a plan from an ordered list of tasks.
    pub fn generate_from(&self, plan: &[Task]) -> Generation {
        let mut state = GenerationState::Idle;
        state.advance(GenerationState::Validating);

        if plan.is_empty() {
            state.advance(GenerationState::Rejected);
            debug_assert!(state.is_terminal());
            return Generation::Rejected {
                message: EMPTY_SELECTION_MESSAGE.to_string(),
            };
        }

        state.advance(GenerationState::Building);
        let document = match self.builder.build(plan) {
            Ok(document) => document,
            Err(e) => {
                debug!("Plan generation failed: {e}");
                return Generation::Rejected {
                    message: EMPTY_SELECTION_MESSAGE.to_string(),
                };
            }
        };

        state.advance(GenerationState::Built);
        let rendered = RenderedPlan::render(document);
        state.advance(GenerationState::Rendered);
        debug_assert!(state.is_terminal());

        Generation::Rendered(Box::new(rendered))
    }
}
