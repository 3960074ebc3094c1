//!
//! The benchmark runner error.
//!

///
/// The benchmark runner error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The measurement program has failed.
    #[error(transparent)]
    Execution(#[from] crate::invoker::error::Error),
    /// The measurement program output is invalid.
    #[error(transparent)]
    Aggregation(#[from] crate::aggregator::error::Error),
    /// The result record cannot be persisted.
    #[error(transparent)]
    Record(#[from] crate::record::error::Error),
}
