//!
//! The benchmark runner binary.
//!

pub(crate) mod arguments;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match main_inner(Arguments::parse()) {
        Ok(()) => benchmark_runner::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            benchmark_runner::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let invocation =
        benchmark_runner::InvocationArguments::new(arguments.graph_path, arguments.repetitions);
    let harness = benchmark_runner::Harness::new(
        benchmark_runner::Invoker::new(benchmark_runner::CommandSpecification::default()),
        benchmark_runner::Aggregator::default(),
    );
    let output_path = Path::new(benchmark_runner::DEFAULT_OUTPUT_PATH);

    println!(
        "    {} {} v{}",
        "Starting".bright_green().bold(),
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );
    println!(
        "     {} {} {}",
        "Running".bright_green().bold(),
        harness.invoker().command().executable.display(),
        harness.invoker().command_line(&invocation).join(" "),
    );

    let aggregation = harness
        .run(&invocation, output_path)
        .context("Benchmark run")?;

    for line in aggregation.unrecognized.iter() {
        eprintln!(
            "{} Unknown prefix `{}` on line {}, ignoring",
            "Warning:".bright_yellow().bold(),
            line.prefix,
            line.line_number,
        );
    }
    let counts = benchmark_runner::Category::ALL
        .into_iter()
        .map(|category| format!("{category}: {}", aggregation.record.get(category).len()))
        .collect::<Vec<String>>()
        .join(", ");
    println!(
        "    {} {} measurements ({counts}) written to {output_path:?}",
        "Finished".bright_green().bold(),
        aggregation.record.len(),
    );

    Ok(())
}
