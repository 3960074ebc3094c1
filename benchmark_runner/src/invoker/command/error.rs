//!
//! The command specification error.
//!

use crate::invoker::command::template::Placeholder;

///
/// The command specification error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The template has no executable.
    #[error("Command template is empty")]
    Empty,
    /// A `$` is not followed by a name, a braced name, or another `$`.
    #[error("Invalid placeholder at position {position} in `{template}`")]
    InvalidPlaceholder {
        /// The template token.
        template: String,
        /// The byte offset of the `$`.
        position: usize,
    },
    /// The placeholder name is not recognized.
    #[error("Unknown placeholder `{name}` in `{template}`")]
    UnknownPlaceholder {
        /// The template token.
        template: String,
        /// The placeholder name.
        name: String,
    },
    /// The executable token contains a placeholder.
    #[error("Executable `{executable}` must not contain placeholders")]
    PlaceholderInExecutable {
        /// The executable token.
        executable: String,
    },
    /// A required placeholder is not used by any argument.
    #[error("Placeholder `${placeholder}` is missing from `{template}`")]
    MissingPlaceholder {
        /// The whole template.
        template: String,
        /// The missing placeholder.
        placeholder: Placeholder,
    },
}
