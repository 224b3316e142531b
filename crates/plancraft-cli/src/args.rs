use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// Pick tasks from a catalog and turn them into a scheduled project plan
///
/// Plancraft keeps a persistent selection of predefined tasks. Once you have
/// picked what the project needs, `generate` schedules the tasks back to back
/// from their duration estimates, groups them by category, and renders the
/// plan for the screen, for sharing, or as a standalone HTML file.
#[derive(Parser)]
#[command(version, about, name = "plancraft")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/plancraft/plancraft.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to a JSON task catalog. Defaults to the built-in catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Plancraft CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List the task catalog, marking selected tasks
    #[command(alias = "t")]
    Tasks,
    /// Add tasks to the plan by ID
    #[command(alias = "s")]
    Select(TaskIdsArgs),
    /// Remove tasks from the plan by ID
    #[command(alias = "d")]
    Deselect(TaskIdsArgs),
    /// Remove every task from the plan
    Clear,
    /// Show the selected tasks in plan order
    Status,
    /// Build the plan and print it
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Print the plan as a message subject and body for sharing
    Share(PlanNameArgs),
    /// Write the plan as a standalone HTML document
    Export(ExportArgs),
    /// Print the JSON schema of the plan view model
    Schema,
}

/// One or more task IDs from the catalog
#[derive(ClapArgs)]
pub struct TaskIdsArgs {
    /// Task IDs as listed by `plancraft tasks`
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<String>,
}

/// Name used for the generated plan
#[derive(ClapArgs)]
pub struct PlanNameArgs {
    /// Plan name shown in headings and used for export file names
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Output format for `generate`
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Markdown summary for the terminal
    View,
    /// Plain-text message body
    Message,
    /// View model as JSON
    Json,
}

#[derive(ClapArgs)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub plan: PlanNameArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::View)]
    pub format: OutputFormat,
}

#[derive(ClapArgs)]
pub struct ExportArgs {
    #[command(flatten)]
    pub plan: PlanNameArgs,

    /// Directory to write the document into
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}
