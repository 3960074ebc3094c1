//!
//! The shared test utilities.
//!

#![allow(dead_code)]

use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

///
/// Writes a shell script standing in for the measurement program.
///
pub fn write_script(directory: &Path, body: &str) -> PathBuf {
    let path = directory.join("measure.sh");
    std::fs::write(path.as_path(), body).expect("Writable");
    path
}

///
/// Returns an invoker running the graph path as a `/bin/sh` script.
///
pub fn shell_invoker() -> benchmark_runner::Invoker {
    let command =
        benchmark_runner::CommandSpecification::from_str("/bin/sh $graph $reps").expect("Valid");
    benchmark_runner::Invoker::new(command)
}
