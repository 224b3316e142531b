//! Plancraft CLI Application
//!
//! Command-line front-end for the plancraft selection-to-plan engine.

mod args;
mod cli;
mod renderer;

use Commands::*;
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use plancraft_core::EngineBuilder;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        catalog,
        no_color,
        command,
    } = Args::parse();

    let engine = EngineBuilder::new()
        .with_database_path(database_file)
        .with_catalog_path(catalog)
        .build()
        .context("Failed to initialize engine")?;

    let renderer = TerminalRenderer::new(!no_color);
    info!("Plancraft started (styled output: {})", renderer.is_styled());

    let mut cli = Cli::new(engine, renderer);

    match command {
        Some(Tasks) => cli.list_tasks(),
        Some(Select(args)) => cli.select(&args.ids),
        Some(Deselect(args)) => cli.deselect(&args.ids),
        Some(Clear) => cli.clear(),
        Some(Status) | None => cli.status(),
        Some(Generate(args)) => cli.generate(&args),
        Some(Share(args)) => cli.share(&args),
        Some(Export(args)) => cli.export(&args),
        Some(Schema) => cli.schema(),
    }
}
