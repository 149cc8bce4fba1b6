//! Command implementations.

use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use trail_gam::{EncodeOptions, Record, read_save, write_save_with_options};

use crate::assign::{Assignment, apply};
use crate::prompt::Prompter;
use crate::render::{render_json, render_layout, render_lookup_tables, render_table, render_text};

/// How `show` prints a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFormat {
    Table,
    Text,
    Json,
}

fn encode_options(truncate: bool) -> EncodeOptions {
    if truncate {
        EncodeOptions::new().truncating()
    } else {
        EncodeOptions::new()
    }
}

/// Read a save and render it.
pub fn run_show(file: &Path, format: ShowFormat, include_reserved: bool) -> Result<String> {
    let record = read_save(file).with_context(|| format!("read {}", file.display()))?;
    info!(path = %file.display(), "read save file");
    let output = match format {
        ShowFormat::Table => render_table(&record, include_reserved).to_string(),
        ShowFormat::Text => render_text(&record, include_reserved),
        ShowFormat::Json => render_json(&record, include_reserved).context("serialize record")?,
    };
    Ok(output)
}

/// Create a new save from defaults, assignments and optional prompting.
pub fn run_new<R: BufRead, W: Write>(
    assignments: &[Assignment],
    prompter: Option<&mut Prompter<R, W>>,
    truncate: bool,
    output: &Path,
) -> Result<Record> {
    let span = info_span!("new", path = %output.display());
    let _guard = span.enter();

    let mut record = Record::defaults();
    apply(&mut record, assignments)?;

    if let Some(prompter) = prompter {
        let assigned: HashSet<&str> = assignments.iter().map(|a| a.field.name).collect();
        prompter.fill(&mut record, &assigned)?;
    }

    write_save_with_options(output, &record, &encode_options(truncate))
        .with_context(|| format!("write {}", output.display()))?;
    info!(assigned = assignments.len(), "wrote new save file");
    Ok(record)
}

/// Apply assignments to an existing save, keeping every other byte.
pub fn run_edit(
    file: &Path,
    assignments: &[Assignment],
    truncate: bool,
    output: Option<&Path>,
) -> Result<Record> {
    let output = output.unwrap_or(file);
    let span = info_span!("edit", path = %file.display());
    let _guard = span.enter();

    let mut record = read_save(file).with_context(|| format!("read {}", file.display()))?;
    apply(&mut record, assignments)?;
    write_save_with_options(output, &record, &encode_options(truncate))
        .with_context(|| format!("write {}", output.display()))?;
    info!(assigned = assignments.len(), output = %output.display(), "wrote edited save file");
    Ok(record)
}

/// Render the record layout.
pub fn run_layout() -> String {
    render_layout().to_string()
}

/// Render the lookup tables.
pub fn run_tables() -> String {
    render_lookup_tables().to_string()
}
