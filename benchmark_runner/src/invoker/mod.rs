//!
//! The measurement program invoker.
//!

pub mod arguments;
pub mod command;
pub mod error;
pub mod output;

use std::process::Stdio;

use self::arguments::InvocationArguments;
use self::command::CommandSpecification;
use self::error::Error;
use self::output::CapturedOutput;

///
/// The measurement program invoker.
///
#[derive(Debug, Clone, Default)]
pub struct Invoker {
    /// The command to run.
    command: CommandSpecification,
}

impl Invoker {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(command: CommandSpecification) -> Self {
        Self { command }
    }

    ///
    /// Returns the command specification.
    ///
    pub fn command(&self) -> &CommandSpecification {
        &self.command
    }

    ///
    /// Returns the arguments passed to the executable.
    ///
    pub fn command_line(&self, arguments: &InvocationArguments) -> Vec<String> {
        self.command
            .arguments
            .iter()
            .map(|template| template.substitute(arguments))
            .collect()
    }

    ///
    /// Runs the measurement program and waits for it to exit.
    ///
    /// The standard error of the program is discarded.
    ///
    pub fn run(&self, arguments: &InvocationArguments) -> Result<CapturedOutput, Error> {
        let executable =
            which::which(self.command.executable.as_path()).map_err(|error| Error::NotFound {
                executable: self.command.executable.clone(),
                error,
            })?;

        let output = std::process::Command::new(executable.as_path())
            .args(self.command_line(arguments))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .map_err(|error| Error::Spawning {
                executable: executable.clone(),
                error,
            })?;
        if !output.status.success() {
            return Err(Error::Status {
                executable,
                status: output.status,
            });
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|error| Error::OutputEncoding { executable, error })?;
        Ok(CapturedOutput::new(text))
    }
}
