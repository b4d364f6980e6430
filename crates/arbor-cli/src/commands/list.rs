//! Algorithm listing command.

use anyhow::Result;
use arbor_adapters::plugins::{ParameterDef, PluginRegistry};
use comfy_table::{Cell, Color};
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};

/// One registered algorithm.
#[derive(Serialize)]
struct AlgorithmOutput<'a> {
    name: &'a str,
    description: &'a str,
    parameters: &'a [ParameterDef],
}

/// Run the list command.
pub fn run(format: OutputFormat, quiet: bool) -> Result<()> {
    let registry = PluginRegistry::with_builtins();
    let algorithms = registry.algorithms();

    let fmt: Format = format.into();
    match fmt {
        Format::Json => {
            let listing: Vec<AlgorithmOutput<'_>> = algorithms
                .iter()
                .map(|algorithm| AlgorithmOutput {
                    name: algorithm.name(),
                    description: algorithm.description(),
                    parameters: algorithm.parameters(),
                })
                .collect();
            output::print_json(&listing, quiet)?;
        }
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Algorithm", "Description", "Parameters"]);
            for algorithm in &algorithms {
                let parameters = algorithm
                    .parameters()
                    .iter()
                    .map(describe_parameter)
                    .collect::<Vec<_>>()
                    .join("\n");
                table.add_row(vec![
                    Cell::new(algorithm.name()).fg(Color::Green),
                    Cell::new(algorithm.description()),
                    Cell::new(parameters),
                ]);
            }
            output::print_table(&table, quiet);
        }
    }
    Ok(())
}

/// Renders a parameter as `name: type = default`.
fn describe_parameter(def: &ParameterDef) -> String {
    match (&def.default, def.required) {
        (Some(default), _) => format!("{}: {} = {default}", def.name, def.param_type),
        (None, true) => format!("{}: {} (required)", def.name, def.param_type),
        (None, false) => format!("{}: {} (optional)", def.name, def.param_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_adapters::plugins::ParameterType;

    #[test]
    fn test_describe_parameter() {
        assert_eq!(
            describe_parameter(&ParameterDef::with_default("start", "Start vertex", 0_i64)),
            "start: int = 0"
        );
        assert_eq!(
            describe_parameter(&ParameterDef::optional("start", "Start", ParameterType::Int)),
            "start: int (optional)"
        );
    }
}
