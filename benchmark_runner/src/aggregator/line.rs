//!
//! A single line of measurement program output.
//!

///
/// A line of the form `<prefix> <value>`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementLine<'a> {
    /// The category prefix token.
    pub prefix: &'a str,
    /// The value token, not yet parsed.
    pub value: &'a str,
}

impl<'a> MeasurementLine<'a> {
    ///
    /// Splits `line` into exactly two whitespace-separated tokens.
    ///
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let prefix = tokens.next()?;
        let value = tokens.next()?;
        if tokens.next().is_some() {
            return None;
        }
        Some(Self { prefix, value })
    }

    ///
    /// Parses the value token as a base-10 integer.
    ///
    pub fn value(&self) -> Result<i128, std::num::ParseIntError> {
        self.value.parse::<i128>()
    }
}
