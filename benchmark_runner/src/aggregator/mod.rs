//!
//! The measurement output aggregator.
//!

pub mod category;
pub mod error;
pub mod line;

use crate::record::ResultRecord;

use self::category::CategoryTable;
use self::error::Error;
use self::line::MeasurementLine;

///
/// A line whose prefix is not in the category table.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedLine {
    /// The 1-based line number.
    pub line_number: usize,
    /// The unrecognized prefix.
    pub prefix: String,
}

///
/// The aggregation result.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    /// The collected measurements.
    pub record: ResultRecord,
    /// The lines skipped because of an unknown prefix.
    pub unrecognized: Vec<UnrecognizedLine>,
}

///
/// The measurement output aggregator.
///
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    /// The recognized prefixes.
    categories: CategoryTable,
}

impl Aggregator {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(categories: CategoryTable) -> Self {
        Self { categories }
    }

    ///
    /// Collects the measurements from the measurement program output.
    ///
    /// Blank lines at the end of the output are dropped. Any other line must
    /// consist of exactly a prefix and a value.
    ///
    pub fn aggregate(&self, output: &str) -> Result<Aggregation, Error> {
        let mut lines: Vec<&str> = output.lines().collect();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }

        let mut aggregation = Aggregation::default();
        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            let measurement =
                MeasurementLine::parse(line).ok_or_else(|| Error::MalformedLine {
                    line_number,
                    line: line.to_owned(),
                })?;

            match self.categories.get(measurement.prefix) {
                Some(category) => {
                    let value = measurement.value().map_err(|error| Error::ValueParse {
                        line_number,
                        value: measurement.value.to_owned(),
                        error,
                    })?;
                    aggregation.record.push(category, value);
                }
                None => aggregation.unrecognized.push(UnrecognizedLine {
                    line_number,
                    prefix: measurement.prefix.to_owned(),
                }),
            }
        }
        Ok(aggregation)
    }
}
