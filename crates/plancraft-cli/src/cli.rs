//! Command handlers for the Plancraft CLI.
//!
//! Each handler drives the core engine and hands the resulting markdown or
//! text to the terminal renderer. The CLI plays the presentation layer and
//! the export trigger; it never formats plan data itself.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use log::info;
use plancraft_core::{Engine, Generation, PlanView, RenderedPlan, SqliteStore, TaskListing};

use crate::{
    args::{ExportArgs, GenerateArgs, OutputFormat, PlanNameArgs},
    renderer::TerminalRenderer,
};

/// CLI handler owning the engine for the lifetime of one command.
pub struct Cli {
    engine: Engine<SqliteStore>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(engine: Engine<SqliteStore>, renderer: TerminalRenderer) -> Self {
        Self { engine, renderer }
    }

    /// Lists the catalog with selection marks.
    pub fn list_tasks(&self) -> Result<()> {
        let selection = self.engine.selection();
        let listing = TaskListing::new(self.engine.catalog().tasks(), |task| {
            selection.is_selected(&task.id)
        });
        self.renderer.render(&format!("# Tasks\n\n{listing}"));
        Ok(())
    }

    /// Selects each id in turn.
    pub fn select(&mut self, ids: &[String]) -> Result<()> {
        for id in ids {
            let added = self
                .engine
                .select(id)
                .with_context(|| format!("Failed to select task '{id}'"))?;
            let verb = if added { "Selected" } else { "Already selected" };
            println!("{verb}: {id}");
        }
        self.print_count();
        Ok(())
    }

    /// Deselects each id in turn.
    pub fn deselect(&mut self, ids: &[String]) -> Result<()> {
        for id in ids {
            if self.engine.deselect(id) {
                println!("Deselected: {id}");
            } else {
                println!("Not selected: {id}");
            }
        }
        self.print_count();
        Ok(())
    }

    /// Clears the selection.
    pub fn clear(&mut self) -> Result<()> {
        self.engine.clear();
        println!("Selection cleared.");
        Ok(())
    }

    /// Shows the current plan in selection order.
    pub fn status(&self) -> Result<()> {
        let selection = self.engine.selection();
        let listing = TaskListing::selected(selection.snapshot());
        self.renderer.render(&format!(
            "# Selected tasks ({})\n\n{listing}",
            selection.count()
        ));
        if !selection.can_generate() {
            println!("\nSelect tasks with `plancraft select <ID>...` to build a plan.");
        }
        Ok(())
    }

    /// Generates the plan and prints it in the requested format.
    pub fn generate(&self, args: &GenerateArgs) -> Result<()> {
        let generation = self.engine.generate_named(args.plan.name.as_deref());
        let plan = rendered(&generation)?;

        match args.format {
            OutputFormat::View => self.renderer.render(&plan.view.to_string()),
            OutputFormat::Message => print!("{}", plan.message_body),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&plan.view)
                    .context("Failed to serialize plan view")?
            ),
        }
        Ok(())
    }

    /// Prints the share payload.
    pub fn share(&self, args: &PlanNameArgs) -> Result<()> {
        let generation = self.engine.generate_named(args.name.as_deref());
        let plan = rendered(&generation)?;

        println!("Subject: {}", plan.message_subject);
        println!();
        print!("{}", plan.message_body);
        Ok(())
    }

    /// Writes the standalone document into the output directory.
    pub fn export(&self, args: &ExportArgs) -> Result<()> {
        let generation = self.engine.generate_named(args.plan.name.as_deref());
        let plan = rendered(&generation)?;

        let path = write_export(&args.output_dir, &plan.file_name, &plan.standalone)?;
        info!("Exported {} document to {}", plan.media_type, path.display());
        println!("Exported plan to {}", path.display());
        Ok(())
    }

    /// Prints the JSON schema of the view model.
    pub fn schema(&self) -> Result<()> {
        let schema = schemars::schema_for!(PlanView);
        println!(
            "{}",
            serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?
        );
        Ok(())
    }

    fn print_count(&self) {
        let count = self.engine.selection().count();
        println!("{count} task{} selected.", if count == 1 { "" } else { "s" });
    }
}

/// Unwraps a generation, turning a rejection into a user-facing error.
fn rendered(generation: &Generation) -> Result<&RenderedPlan> {
    match generation {
        Generation::Rendered(plan) => Ok(plan.as_ref()),
        Generation::Rejected { message } => bail!("{message}"),
    }
}

fn write_export(dir: &Path, file_name: &str, contents: &str) -> Result<std::path::PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = dir.join(file_name);
    fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
