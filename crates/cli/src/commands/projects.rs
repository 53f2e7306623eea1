//! Project listing command

use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use quill_adapters::{HttpProjectSource, TracedProjectSource};
use quill_view::{poll_interval, ProjectWatcher};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct ProjectsArgs {
    /// Project feed URL
    #[arg(long)]
    pub url: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct ProjectRow {
    id: i64,
    title: String,
    status: String,
    selected: bool,
}

impl fmt::Display for ProjectRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.selected { "*" } else { " " };
        write!(
            f,
            "{} {:<6} {:<24} {:<12}",
            marker, self.id, self.title, self.status
        )
    }
}

pub async fn handle(args: ProjectsArgs) -> Result<()> {
    let source = TracedProjectSource::new(HttpProjectSource::new(&args.url));
    let (watcher, handle) = ProjectWatcher::new(source, poll_interval());
    watcher.poll_once().await?;

    let selected = handle.selected_id();
    let rows: Vec<ProjectRow> = handle
        .projects()
        .iter()
        .map(|p| ProjectRow {
            id: p.id.0,
            title: p.title.clone(),
            status: p.status.to_string(),
            selected: Some(p.id) == selected,
        })
        .collect();

    if let OutputFormat::Text = args.format {
        if rows.is_empty() {
            println!("No projects found.");
            return Ok(());
        }
        println!("  {:<6} {:<24} {:<12}", "ID", "TITLE", "STATUS");
        println!("{}", "-".repeat(46));
    }

    output::print_list(&rows, args.format);
    Ok(())
}
