//! Stage reference table command

use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use quill_core::Stage;
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct StagesArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct StageRow {
    name: &'static str,
    label: &'static str,
}

impl fmt::Display for StageRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12} {}", self.name, self.label)
    }
}

pub fn handle(args: StagesArgs) -> Result<()> {
    let rows: Vec<StageRow> = Stage::ALL
        .iter()
        .map(|s| StageRow {
            name: s.name(),
            label: s.label(),
        })
        .collect();

    output::print_list(&rows, args.format);
    Ok(())
}
