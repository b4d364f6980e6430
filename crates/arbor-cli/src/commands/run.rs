//! Algorithm run command.

use anyhow::{Result, anyhow};
use arbor_adapters::plugins::algorithms::DistanceMap;
use arbor_adapters::plugins::{AlgorithmResult, Parameters, PluginRegistry};
use arbor_common::types::{VertexId, Weight};
use arbor_common::utils::error::Error;
use comfy_table::{Cell, Color, Table};
use serde::Serialize;

use crate::output::{self, Format};
use crate::samples::{self, Sample};
use crate::{OutputFormat, RunArgs};

/// Result of one run.
#[derive(Serialize)]
struct RunOutput<'a> {
    algorithm: &'a str,
    sample: &'a str,
    result: &'a AlgorithmResult,
}

/// Run the run command.
pub fn run(args: &RunArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let sample = samples::find(&args.sample).ok_or_else(|| {
        anyhow!(
            "unknown sample '{}', available: {}",
            args.sample,
            samples::names()
        )
    })?;

    let registry = PluginRegistry::with_builtins();
    let algorithm = registry.get(&args.algorithm).ok_or_else(|| {
        anyhow!(
            "unknown algorithm '{}', available: {}",
            args.algorithm,
            registry.names().join(", ")
        )
    })?;

    let params = build_parameters(args, sample, |name| {
        algorithm.parameters().iter().any(|def| def.name == name)
    });
    tracing::debug!(
        algorithm = %args.algorithm,
        sample = sample.name,
        parameters = params.len(),
        "running"
    );

    let result = registry
        .run(&args.algorithm, &sample.graph(), &params)
        .map_err(|error| {
            let context = failure_context(&args.algorithm, sample.name, &error);
            anyhow::Error::new(error).context(context)
        })?;

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(
            &RunOutput {
                algorithm: &args.algorithm,
                sample: sample.name,
                result: &result,
            },
            quiet,
        )?,
        Format::Table => {
            output::status(
                &format!("{} on '{}' ({})", args.algorithm, sample.name, result.kind()),
                quiet,
            );
            render(&result, quiet);
        }
    }
    Ok(())
}

/// Collects the flags the algorithm understands; the rest are dropped with a
/// warning. The sample's own directedness is passed along when the algorithm
/// has a `directed` flag.
fn build_parameters(
    args: &RunArgs,
    sample: &Sample,
    accepts: impl Fn(&str) -> bool,
) -> Parameters {
    let mut params = Parameters::new();
    if let Some(start) = args.start {
        if accepts("start") {
            params.set("start", start);
        } else {
            tracing::warn!(algorithm = %args.algorithm, "ignoring --start");
        }
    }
    if let Some(strategy) = &args.strategy {
        if accepts("strategy") {
            params.set("strategy", strategy.as_str());
        } else {
            tracing::warn!(algorithm = %args.algorithm, "ignoring --strategy");
        }
    }
    if accepts("directed") {
        params.set("directed", sample.directed);
    }
    params
}

/// Describes a failed run. Graph properties (a cycle where none may be) are
/// reported against the sample; everything else against the request.
fn failure_context(algorithm: &str, sample: &str, error: &Error) -> String {
    if error.is_graph_property() {
        format!("sample '{sample}' cannot be processed by {algorithm}")
    } else {
        format!("invalid {algorithm} request on sample '{sample}'")
    }
}

fn distance_cell(distance: Option<Weight>) -> Cell {
    match distance {
        Some(distance) => Cell::new(distance),
        None => Cell::new("∞").fg(Color::DarkGrey),
    }
}

fn render(result: &AlgorithmResult, quiet: bool) {
    match result {
        AlgorithmResult::Distances { source, distances } => {
            let heading = format!("Distance from {source}");
            let mut table = output::create_table();
            output::add_header(&mut table, &["Vertex", heading.as_str()]);
            for vertex in 0..distances.len() {
                table.add_row(vec![Cell::new(vertex), distance_cell(distances.distance(vertex))]);
            }
            output::print_table(&table, quiet);
            output::status(
                &format!(
                    "{} of {} vertices reachable",
                    distances.reachable().len(),
                    distances.len()
                ),
                quiet,
            );
        }
        AlgorithmResult::DistanceMatrix {
            matrix,
            negative_cycle,
        } => {
            let mut table = output::create_table();
            let columns: Vec<String> = (0..matrix.len()).map(|v| v.to_string()).collect();
            let header: Vec<&str> = std::iter::once("")
                .chain(columns.iter().map(String::as_str))
                .collect();
            output::add_header(&mut table, &header);
            for (from, row) in matrix.iter().enumerate() {
                let mut cells = vec![Cell::new(from).fg(Color::Cyan)];
                cells.extend((0..row.len()).map(|to| distance_cell(row.distance(to))));
                table.add_row(cells);
            }
            output::print_table(&table, quiet);
            if *negative_cycle {
                output::status("negative cycle present: distances are not shortest paths", quiet);
            }
        }
        AlgorithmResult::Order { order } => output::print_table(&order_table(order), quiet),
        AlgorithmResult::SpanningTree(tree) => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["From", "To", "Weight"]);
            for edge in &tree.edges {
                table.add_row(vec![
                    Cell::new(edge.source),
                    Cell::new(edge.destination),
                    Cell::new(edge.weight),
                ]);
            }
            output::print_table(&table, quiet);
            output::print_key_value_table(
                &[
                    ("Total weight", tree.total_weight.to_string()),
                    ("Edges", tree.edge_count().to_string()),
                    ("Trees", tree.tree_count.to_string()),
                ],
                quiet,
            );
        }
        AlgorithmResult::Components { labels, count } => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Vertex", "Component"]);
            for (vertex, label) in labels.iter().enumerate() {
                table.add_row(vec![Cell::new(vertex), Cell::new(label)]);
            }
            output::print_table(&table, quiet);
            output::status(&format!("{count} component(s)"), quiet);
        }
        AlgorithmResult::Flag { value } => {
            output::print_key_value_table(&[("Result", value.to_string())], quiet);
        }
    }
}

fn order_table(order: &[VertexId]) -> Table {
    let mut table = output::create_table();
    output::add_header(&mut table, &["Position", "Vertex"]);
    for (position, vertex) in order.iter().enumerate() {
        table.add_row(vec![Cell::new(position), Cell::new(vertex)]);
    }
    table
}
