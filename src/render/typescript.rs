//! Interface declaration writer

use crate::error::Result;
use crate::infer::RecordDef;
use std::io::Write;

/// Write one record definition as an `export interface` block.
///
/// One property per line, tab indented, in property iteration order. The
/// only failure mode is the underlying writer's I/O error, which propagates
/// unhandled.
pub fn write_definition<W: Write>(definition: &RecordDef, writer: &mut W) -> Result<()> {
    writeln!(writer, "export interface {} {{", definition.name)?;
    for (field, rendered) in &definition.properties {
        writeln!(writer, "\t{field}: {rendered};")?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write a sequence of definitions, separated by a single blank line.
pub fn write_definitions<W: Write>(definitions: &[RecordDef], writer: &mut W) -> Result<()> {
    for (i, definition) in definitions.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        write_definition(definition, writer)?;
    }
    Ok(())
}

/// Render a sequence of definitions to a string.
pub fn render_to_string(definitions: &[RecordDef]) -> String {
    let mut buf = Vec::new();
    if write_definitions(definitions, &mut buf).is_err() {
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}
