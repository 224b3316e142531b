//! Self-contained HTML document for file export.

use std::fmt;

use html_escape::encode_text;

use super::{LongDate, days_label};
use crate::models::PlanDocument;

/// Media type of the exported document.
pub const MEDIA_TYPE: &str = "text/html";

/// File extension matching [`MEDIA_TYPE`].
pub const FILE_EXTENSION: &str = "html";

const STYLESHEET: &str = "\
body { font-family: -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; color: #1f2933; line-height: 1.5; }
h1 { border-bottom: 3px solid #3b82f6; padding-bottom: .5rem; }
h2 { margin-top: 2rem; color: #1e40af; }
.stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr)); gap: 1rem; }
.stat { background: #f1f5f9; border-radius: .5rem; padding: .75rem 1rem; }
.stat .value { display: block; font-size: 1.5rem; font-weight: 700; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: .5rem; border-bottom: 1px solid #e2e8f0; }
.task { margin: .75rem 0; padding: .75rem 1rem; border-left: 4px solid #3b82f6; background: #f8fafc; }
.meta { color: #64748b; font-size: .9rem; }
@media print { body { margin: 0; } .task { break-inside: avoid; } }
";

/// Complete, independently openable HTML rendering of a plan.
///
/// All task text is HTML-escaped; the stylesheet is embedded so the file
/// needs nothing else to display.
pub struct StandaloneDocument<'a>(pub &'a PlanDocument);

impl StandaloneDocument<'_> {
    /// Suggested file name: `<plan-name>-<YYYY-MM-DD>.html`.
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}.{FILE_EXTENSION}",
            slugify(&self.0.name),
            self.0.created_date
        )
    }

    /// Media type of the rendered output.
    pub fn media_type(&self) -> &'static str {
        MEDIA_TYPE
    }
}

impl fmt::Display for StandaloneDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let document = self.0;
        let name = encode_text(&document.name);

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"utf-8\">")?;
        writeln!(
            f,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
        )?;
        writeln!(f, "<title>{name}</title>")?;
        writeln!(f, "<style>\n{STYLESHEET}</style>")?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;

        writeln!(f, "<h1>{name}</h1>")?;
        writeln!(
            f,
            "<p class=\"meta\">Created {}</p>",
            LongDate(&document.created_date)
        )?;

        writeln!(f, "<section class=\"stats\">")?;
        write_stat(f, "Tasks", &document.task_count.to_string())?;
        write_stat(f, "Categories", &document.category_count.to_string())?;
        write_stat(
            f,
            "Estimated duration",
            &days_label(document.estimated_duration_days),
        )?;
        write_stat(
            f,
            "Estimated completion",
            &LongDate(&document.estimated_completion_date).to_string(),
        )?;
        writeln!(f, "</section>")?;

        writeln!(f, "<h2>Timeline</h2>")?;
        writeln!(f, "<table>")?;
        writeln!(f, "<thead><tr><th>Days</th><th>Task</th><th>Duration</th></tr></thead>")?;
        writeln!(f, "<tbody>")?;
        for entry in &document.timeline {
            writeln!(
                f,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                entry.day_range(),
                encode_text(&entry.task_title),
                days_label(entry.duration_days)
            )?;
        }
        writeln!(f, "</tbody>")?;
        writeln!(f, "</table>")?;

        writeln!(f, "<h2>Tasks by Category</h2>")?;
        for group in &document.tasks_by_category {
            writeln!(f, "<h3>{}</h3>", encode_text(&group.category))?;
            for task in &group.tasks {
                writeln!(f, "<div class=\"task\">")?;
                writeln!(f, "<strong>{}</strong>", encode_text(&task.title))?;
                writeln!(
                    f,
                    "<div class=\"meta\">{} · {}</div>",
                    encode_text(&task.duration),
                    encode_text(&task.difficulty)
                )?;
                if !task.description.is_empty() {
                    writeln!(f, "<p>{}</p>", encode_text(&task.description))?;
                }
                writeln!(f, "</div>")?;
            }
        }

        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

fn write_stat(f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
    writeln!(
        f,
        "<div class=\"stat\"><span class=\"value\">{}</span>{}</div>",
        encode_text(value),
        label
    )
}

/// Lowercase, dash-separated ASCII form of a plan name for file names.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        crate::planner::DEFAULT_PLAN_NAME.to_string()
    } else {
        slug.to_string()
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{models::Task, planner::PlanDocumentBuilder};

    fn sample_document(name: &str) -> PlanDocument {
        let plan = vec![
            Task::new("xss", "<script>alert(1)</script>", "1 week")
                .with_description("Tom & Jerry's \"fix\"")
                .with_category("security"),
        ];
        PlanDocumentBuilder::new()
            .with_name(name)
            .with_date(date(2024, 6, 1))
            .build(&plan)
            .expect("Failed to build document")
    }

    #[test]
    fn test_document_is_complete() {
        let document = sample_document("Audit");
        let html = StandaloneDocument(&document).to_string();

        assert!(html.starts_with("<!DOCTYPE html>\n<html"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<title>Audit</title>"));
        assert!(html.contains("<td>Days 1-7</td>"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let document = sample_document("A <b> plan");
        let html = StandaloneDocument(&document).to_string();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(html.contains("<h1>A &lt;b&gt; plan</h1>"));
    }

    #[test]
    fn test_file_name() {
        let document = sample_document("Q3 Website Refresh!");
        let export = StandaloneDocument(&document);

        assert_eq!(export.file_name(), "q3-website-refresh-2024-06-01.html");
        assert_eq!(export.media_type(), "text/html");
    }

    #[test]
    fn test_slugify_edge_cases() {
        assert_eq!(slugify("  --Hello,  World--  "), "hello-world");
        assert_eq!(slugify("日本語"), "project-plan");
    }
}
