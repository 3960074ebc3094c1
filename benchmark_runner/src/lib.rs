//!
//! The benchmark runner library.
//!

pub mod aggregator;
pub mod error;
pub mod harness;
pub mod invoker;
pub mod record;

pub use crate::aggregator::category::Category;
pub use crate::aggregator::category::CategoryTable;
pub use crate::aggregator::error::Error as AggregatorError;
pub use crate::aggregator::Aggregation;
pub use crate::aggregator::Aggregator;
pub use crate::aggregator::UnrecognizedLine;
pub use crate::error::Error;
pub use crate::harness::Harness;
pub use crate::invoker::arguments::InvocationArguments;
pub use crate::invoker::command::error::Error as CommandError;
pub use crate::invoker::command::CommandSpecification;
pub use crate::invoker::error::Error as ExecutionError;
pub use crate::invoker::output::CapturedOutput;
pub use crate::invoker::Invoker;
pub use crate::record::error::Error as RecordError;
pub use crate::record::ResultRecord;

/// The default result record path.
pub const DEFAULT_OUTPUT_PATH: &str = "result.bench";

/// The successful exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;
