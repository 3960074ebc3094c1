//!
//! The benchmark runner pipeline tests.
//!

#![cfg(unix)]

mod common;

const PREVIOUS_RESULT: &str = r#"{ "map": [1], "array": [2], "vector": [3] }"#;

type RunResult = Result<benchmark_runner::Aggregation, benchmark_runner::Error>;

///
/// Runs `script_body` over a previous result and returns the outcome and the file contents.
///
fn run(script_body: &str) -> (RunResult, String) {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let script = common::write_script(directory.path(), script_body);
    let output_path = directory.path().join("result.bench");
    std::fs::write(output_path.as_path(), PREVIOUS_RESULT).expect("Writable");

    let harness = benchmark_runner::Harness::new(
        common::shell_invoker(),
        benchmark_runner::Aggregator::default(),
    );
    let arguments = benchmark_runner::InvocationArguments::new(script.to_string_lossy(), "3");
    let result = harness.run(&arguments, output_path.as_path());

    let written = std::fs::read_to_string(output_path.as_path()).expect("Readable");
    (result, written)
}

#[test]
fn writes_record() {
    let (result, written) =
        run("echo 'UID-based: 10'\necho 'Array-based: 20'\necho 'UID-based: 15'\n");

    let aggregation = result.expect("Successful run");
    let record: benchmark_runner::ResultRecord =
        serde_json::from_str(written.as_str()).expect("Valid record");
    assert_eq!(record, aggregation.record);
    assert_eq!(record.map, vec![10, 15]);
    assert_eq!(record.array, vec![20]);
    assert!(record.vector.is_empty());
}

#[test]
fn repetitions_reach_the_program() {
    let (result, _) = run(
        "i=0\nwhile [ \"$i\" -lt \"$1\" ]; do echo \"Vector-based: $i\"; i=$((i + 1)); done\n",
    );

    assert_eq!(result.expect("Successful run").record.vector, vec![0, 1, 2]);
}

#[test]
fn unknown_prefix_writes_empty_record() {
    let (result, written) = run("echo 'Weird-based: 99'\n");

    let aggregation = result.expect("Successful run");
    assert_eq!(aggregation.unrecognized.len(), 1);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(written.as_str()).expect("Valid record"),
        serde_json::json!({ "map": [], "array": [], "vector": [] })
    );
}

#[test]
fn error_execution_keeps_previous_record() {
    let (result, written) = run("echo 'UID-based: 10'\nexit 1\n");

    assert!(matches!(result, Err(benchmark_runner::Error::Execution(_))));
    assert_eq!(written, PREVIOUS_RESULT);
}

#[test]
fn error_value_parse_keeps_previous_record() {
    let (result, written) = run("echo 'UID-based: 10'\necho 'UID-based: notanumber'\n");

    assert!(matches!(
        result,
        Err(benchmark_runner::Error::Aggregation(
            benchmark_runner::AggregatorError::ValueParse { line_number: 2, .. }
        ))
    ));
    assert_eq!(written, PREVIOUS_RESULT);
}

#[test]
fn error_malformed_line_keeps_previous_record() {
    let (result, written) = run("echo 'UID-based: 10 ns'\n");

    assert!(matches!(
        result,
        Err(benchmark_runner::Error::Aggregation(
            benchmark_runner::AggregatorError::MalformedLine { .. }
        ))
    ));
    assert_eq!(written, PREVIOUS_RESULT);
}
