//! Renderers turning a [`PlanDocument`](crate::models::PlanDocument) into
//! output formats.
//!
//! Every renderer reads only the document it is given, so all outputs of one
//! generation request agree with each other by construction.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────────┐    ┌─────────────────┐
//! │  PlanDocument   │    │ PlanView            │    │ screen          │
//! │  (canonical)    │───▶│ MessageBody         │───▶│ share action    │
//! │                 │    │ StandaloneDocument  │    │ file export     │
//! └─────────────────┘    └─────────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`view`]: structured, serializable view model ([`PlanView`]) with a
//!   markdown `Display` for terminals
//! - [`message`]: plain-text message body ([`MessageBody`])
//! - [`standalone`]: self-contained HTML document ([`StandaloneDocument`])
//! - [`collections`]: task listings for catalog and selection screens
//! - [`datetime`]: date formatting helpers

pub mod collections;
pub mod datetime;
pub mod message;
pub mod standalone;
pub mod view;

pub use collections::TaskListing;
pub use datetime::LongDate;
pub use message::MessageBody;
pub use standalone::StandaloneDocument;
pub use view::{CategorySection, PlanView, SummaryView, TaskCard, TimelineRow};

/// "1 day" or "N days".
pub(crate) fn days_label(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}
