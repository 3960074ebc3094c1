//!
//! The invoke, aggregate, and write pipeline.
//!

use std::path::Path;

use crate::aggregator::Aggregation;
use crate::aggregator::Aggregator;
use crate::error::Error;
use crate::invoker::arguments::InvocationArguments;
use crate::invoker::Invoker;

///
/// The invoke, aggregate, and write pipeline.
///
#[derive(Debug, Clone, Default)]
pub struct Harness {
    /// Runs the measurement program.
    invoker: Invoker,
    /// Collects the measurements.
    aggregator: Aggregator,
}

impl Harness {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(invoker: Invoker, aggregator: Aggregator) -> Self {
        Self {
            invoker,
            aggregator,
        }
    }

    ///
    /// Returns the invoker.
    ///
    pub fn invoker(&self) -> &Invoker {
        &self.invoker
    }

    ///
    /// Runs the measurement program and writes the collected record to `output_path`.
    ///
    /// Nothing is written if any step fails. Concurrent runs against the same
    /// `output_path` are not synchronized.
    ///
    pub fn run(
        &self,
        arguments: &InvocationArguments,
        output_path: &Path,
    ) -> Result<Aggregation, Error> {
        let output = self.invoker.run(arguments)?;
        let aggregation = self.aggregator.aggregate(output.as_str())?;
        aggregation.record.write_to_file(output_path)?;
        Ok(aggregation)
    }
}
