//!
//! The captured standard output of the measurement program.
//!

///
/// The captured standard output of the measurement program.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    /// The decoded text.
    text: String,
}

impl CapturedOutput {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(text: String) -> Self {
        Self { text }
    }

    ///
    /// Returns the captured text.
    ///
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }
}
