//!
//! The measurement program command specification.
//!

pub mod error;
pub mod template;

use std::path::PathBuf;
use std::str::FromStr;

use self::error::Error;
use self::template::Placeholder;
use self::template::Template;

///
/// The measurement program command specification.
///
/// The first whitespace-separated token of the template is the executable,
/// the rest are argument templates passed to it as discrete arguments.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpecification {
    /// The measurement program path.
    pub executable: PathBuf,
    /// The argument templates.
    pub arguments: Vec<Template>,
}

impl CommandSpecification {
    /// The measurement program command template.
    pub const DEFAULT_TEMPLATE: &'static str = "./build/apps/parsing_speed_comparison $graph $reps";
}

impl Default for CommandSpecification {
    fn default() -> Self {
        Self::from_str(Self::DEFAULT_TEMPLATE).expect("Always valid")
    }
}

impl FromStr for CommandSpecification {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let mut tokens = string.split_whitespace();

        let executable = tokens.next().ok_or(Error::Empty)?;
        let executable = Template::from_str(executable)?.literal().ok_or_else(|| {
            Error::PlaceholderInExecutable {
                executable: executable.to_owned(),
            }
        })?;

        let arguments = tokens
            .map(Template::from_str)
            .collect::<Result<Vec<Template>, Error>>()?;
        for placeholder in Placeholder::ALL.into_iter() {
            if !arguments
                .iter()
                .any(|argument| argument.placeholders().any(|used| used == placeholder))
            {
                return Err(Error::MissingPlaceholder {
                    template: string.to_owned(),
                    placeholder,
                });
            }
        }

        Ok(Self {
            executable: PathBuf::from(executable),
            arguments,
        })
    }
}
