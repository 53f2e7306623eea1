// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! quill - generation pipeline viewer CLI

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod output;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{projects, stages, watch};

#[derive(Parser)]
#[command(
    name = "quill",
    version,
    about = "Quill - view your content-generation pipelines"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the project list once and show the resolved selection
    Projects(projects::ProjectsArgs),
    /// Poll the project feed and render the viewed project continuously
    Watch(watch::WatchArgs),
    /// Show the pipeline stage reference table
    Stages(stages::StagesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Projects(args) => projects::handle(args).await,
        Commands::Watch(args) => watch::handle(args).await,
        Commands::Stages(args) => stages::handle(args),
    }
}
