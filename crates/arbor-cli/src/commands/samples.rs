//! Sample graph listing command.

use anyhow::Result;
use comfy_table::{Cell, Color};

use crate::OutputFormat;
use crate::output::{self, Format};
use crate::samples::SAMPLES;

/// Run the samples command.
pub fn run(format: OutputFormat, quiet: bool) -> Result<()> {
    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&SAMPLES, quiet)?,
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(
                &mut table,
                &["Sample", "Vertices", "Edges", "Directed", "Description"],
            );
            for sample in SAMPLES {
                table.add_row(vec![
                    Cell::new(sample.name).fg(Color::Green),
                    Cell::new(sample.vertex_count),
                    Cell::new(sample.edge_count()),
                    Cell::new(sample.directed),
                    Cell::new(sample.description),
                ]);
            }
            output::print_table(&table, quiet);
        }
    }
    Ok(())
}
