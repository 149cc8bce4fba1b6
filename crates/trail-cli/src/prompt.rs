//! Interactive prompting for the fields of a new save.

use std::collections::HashSet;
use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use tracing::debug;
use trail_gam::{FieldDescriptor, FieldKind, FieldValue, Record, SaveText};

use crate::assign::parse_value;

/// Asks for field values on `output` and reads answers from `input`.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt for every field a new save needs, except those in `skip`.
    pub fn fill(&mut self, record: &mut Record, skip: &HashSet<&str>) -> Result<()> {
        for field in Record::prompted_fields() {
            if skip.contains(field.name) {
                continue;
            }
            let value = self.ask(field)?;
            record.set(field.name, value)?;
        }
        Ok(())
    }

    /// Ask for one field until a usable value is given.
    ///
    /// Empty answers are asked again. Fails if the input ends first.
    pub fn ask(&mut self, field: &FieldDescriptor) -> Result<FieldValue> {
        self.describe(field)?;
        loop {
            write!(self.output, "{}: ", field.name)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input ended before a value for {} was given", field.name);
            }
            let answer = line.trim_end_matches(['\r', '\n']);
            if answer.trim().is_empty() {
                continue;
            }
            if field.kind == FieldKind::Text {
                match SaveText::new(answer).encoded_len() {
                    Ok(len) if len > field.width => {
                        writeln!(
                            self.output,
                            "  {} holds at most {} characters",
                            field.name, field.width
                        )?;
                        continue;
                    }
                    Ok(_) => {}
                    Err(reason) => {
                        writeln!(self.output, "  {} cannot be saved: {reason}", field.name)?;
                        continue;
                    }
                }
            }
            match parse_value(field, answer) {
                Ok(value) => {
                    debug!(field = field.name, "value entered");
                    return Ok(value);
                }
                Err(error) => writeln!(self.output, "  {error:#}")?,
            }
        }
    }

    /// Show the lookup table or numeric limit for a field.
    fn describe(&mut self, field: &FieldDescriptor) -> Result<()> {
        if let Some(table) = field.lookup {
            for (code, label) in table.entries {
                writeln!(self.output, "  {code}: {label}")?;
            }
        }
        if let Some((_, max)) = field.kind.range() {
            writeln!(self.output, "Max value is {max}")?;
        }
        Ok(())
    }
}
