//!
//! The measurement output aggregation error.
//!

///
/// The measurement output aggregation error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The line does not consist of exactly a prefix and a value.
    #[error("Malformed measurement line {line_number}: `{line}`")]
    MalformedLine {
        /// The 1-based line number.
        line_number: usize,
        /// The line contents.
        line: String,
    },
    /// The value is not a base-10 integer.
    #[error("Measurement line {line_number} value `{value}` parsing: {error}")]
    ValueParse {
        /// The 1-based line number.
        line_number: usize,
        /// The value token.
        value: String,
        /// The underlying parsing error.
        error: std::num::ParseIntError,
    },
}
