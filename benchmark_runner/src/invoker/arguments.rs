//!
//! The measurement program invocation arguments.
//!

use crate::invoker::command::template::Placeholder;

///
/// The measurement program invocation arguments.
///
/// Both values are passed through as text and are never validated here.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationArguments {
    /// The graph input path.
    pub graph_path: String,
    /// The repetition count.
    pub repetitions: String,
}

impl InvocationArguments {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(graph_path: impl Into<String>, repetitions: impl Into<String>) -> Self {
        Self {
            graph_path: graph_path.into(),
            repetitions: repetitions.into(),
        }
    }

    ///
    /// Returns the value substituted for `placeholder`.
    ///
    pub fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Graph => self.graph_path.as_str(),
            Placeholder::Reps => self.repetitions.as_str(),
        }
    }
}
